//src/seed.rs
//! Built-in exercise library and workout plan catalog, loaded whenever the
//! corresponding collection is empty at startup.

use crate::models::{
    Difficulty, Equipment, Exercise, MuscleGroup, PlannedExercise, WorkoutPlan,
};

/// The built-in exercise library.
pub fn default_exercises() -> Vec<Exercise> {
    vec![
        // Chest
        Exercise::new(
            "Bench Press",
            MuscleGroup::Chest,
            Equipment::Barbell,
            Difficulty::Intermediate,
            "Classic chest compound movement. Retract shoulder blades, keep feet flat, lower the bar to mid-chest.",
        )
        .with_image("https://api.exercisedb.io/image/bench-press")
        .with_variations(&["Close Grip", "Wide Grip", "Paused"]),
        Exercise::new(
            "Incline Dumbbell Press",
            MuscleGroup::Chest,
            Equipment::Dumbbells,
            Difficulty::Intermediate,
            "Upper chest focused press. Set the bench at 30-45 degrees and control the eccentric phase.",
        )
        .with_image("https://api.exercisedb.io/image/incline-db-press")
        .with_variations(&["Neutral Grip", "Alternating", "Single Arm"]),
        Exercise::new(
            "Dumbbell Flyes",
            MuscleGroup::Chest,
            Equipment::Dumbbells,
            Difficulty::Intermediate,
            "Isolation exercise for chest width",
        )
        .with_image("https://api.exercisedb.io/image/dumbbell-flyes"),
        Exercise::new(
            "Push-up",
            MuscleGroup::Chest,
            Equipment::Bodyweight,
            Difficulty::Beginner,
            "Fundamental pushing movement. Keep a straight line from head to heels.",
        )
        .with_image("https://api.exercisedb.io/image/push-up")
        .with_variations(&["Incline", "Decline", "Diamond", "Archer"]),
        // Back
        Exercise::new(
            "Pull-up",
            MuscleGroup::Back,
            Equipment::Bodyweight,
            Difficulty::Intermediate,
            "Upper body pulling movement. Start from a dead hang, pull the shoulder blades down first, lead with the chest.",
        )
        .with_image("https://api.exercisedb.io/image/pull-up")
        .with_variations(&["Wide Grip", "Neutral Grip", "Chin-up", "Mixed Grip"]),
        Exercise::new(
            "Bent Over Row",
            MuscleGroup::Back,
            Equipment::Barbell,
            Difficulty::Intermediate,
            "Horizontal pull for back thickness. Hinge at the hips and keep a neutral spine.",
        )
        .with_image("https://api.exercisedb.io/image/bent-over-row")
        .with_variations(&["Pendlay", "Underhand", "Yates"]),
        Exercise::new(
            "Dumbbell Row",
            MuscleGroup::Back,
            Equipment::Dumbbells,
            Difficulty::Beginner,
            "Unilateral horizontal pull with chest support or bench brace",
        )
        .with_image("https://api.exercisedb.io/image/dumbbell-row"),
        Exercise::new(
            "Deadlift",
            MuscleGroup::Back,
            Equipment::Barbell,
            Difficulty::Advanced,
            "Full posterior chain hinge. Brace hard and keep the bar close.",
        )
        .with_image("https://api.exercisedb.io/image/deadlift")
        .with_variations(&["Conventional", "Sumo", "Deficit", "Paused"]),
        Exercise::new(
            "Straight Arm Pulldown",
            MuscleGroup::Back,
            Equipment::Cable,
            Difficulty::Beginner,
            "Lat isolation exercise",
        )
        .with_image("https://api.exercisedb.io/image/straight-arm-pulldown"),
        // Legs
        Exercise::new(
            "Squat",
            MuscleGroup::Legs,
            Equipment::Barbell,
            Difficulty::Intermediate,
            "Fundamental lower body movement. Break at hips and knees together, keep the chest up, drive through the heels.",
        )
        .with_image("https://api.exercisedb.io/image/squat")
        .with_variations(&["Front Squat", "Box Squat", "Pause Squat", "High-Bar", "Low-Bar"]),
        Exercise::new(
            "Romanian Deadlift",
            MuscleGroup::Legs,
            Equipment::Barbell,
            Difficulty::Intermediate,
            "Hip hinge targeting hamstrings and glutes. Push the hips back with a soft knee bend.",
        )
        .with_image("https://api.exercisedb.io/image/romanian-deadlift"),
        Exercise::new(
            "Leg Press",
            MuscleGroup::Legs,
            Equipment::Machine,
            Difficulty::Beginner,
            "Machine compound press for quads and glutes",
        )
        .with_image("https://api.exercisedb.io/image/leg-press"),
        Exercise::new(
            "Leg Extension",
            MuscleGroup::Legs,
            Equipment::Machine,
            Difficulty::Beginner,
            "Quad isolation exercise",
        )
        .with_image("https://api.exercisedb.io/image/leg-extension"),
        Exercise::new(
            "Calf Raises",
            MuscleGroup::Legs,
            Equipment::Machine,
            Difficulty::Beginner,
            "Calf isolation; pause at the stretch and squeeze at the top",
        )
        .with_image("https://api.exercisedb.io/image/calf-raises"),
        Exercise::new(
            "Bulgarian Split Squat",
            MuscleGroup::Legs,
            Equipment::Dumbbells,
            Difficulty::Intermediate,
            "Unilateral leg development",
        )
        .with_image("https://api.exercisedb.io/image/bulgarian-split-squat"),
        Exercise::new(
            "Hip Thrust",
            MuscleGroup::Legs,
            Equipment::Barbell,
            Difficulty::Intermediate,
            "Glute focused exercise",
        )
        .with_image("https://api.exercisedb.io/image/hip-thrust"),
        Exercise::new(
            "Bodyweight Squat",
            MuscleGroup::Legs,
            Equipment::Bodyweight,
            Difficulty::Beginner,
            "Unloaded squat pattern for warm-ups and conditioning",
        )
        .with_image("https://api.exercisedb.io/image/bodyweight-squat"),
        // Shoulders
        Exercise::new(
            "Overhead Press",
            MuscleGroup::Shoulders,
            Equipment::Barbell,
            Difficulty::Intermediate,
            "Vertical pressing movement. Stack wrist, elbow, and shoulder, brace the core, press straight up.",
        )
        .with_image("https://api.exercisedb.io/image/overhead-press")
        .with_variations(&["Push Press", "Single Arm", "Seated"]),
        Exercise::new(
            "Lateral Raise",
            MuscleGroup::Shoulders,
            Equipment::Dumbbells,
            Difficulty::Beginner,
            "Side deltoid isolation; lead with the elbows",
        )
        .with_image("https://api.exercisedb.io/image/lateral-raise"),
        Exercise::new(
            "Reverse Flyes",
            MuscleGroup::Shoulders,
            Equipment::Dumbbells,
            Difficulty::Beginner,
            "Rear deltoid isolation",
        )
        .with_image("https://api.exercisedb.io/image/reverse-flyes"),
        // Arms
        Exercise::new(
            "Bicep Curl",
            MuscleGroup::Arms,
            Equipment::Dumbbells,
            Difficulty::Beginner,
            "Bicep isolation; keep the elbows pinned at the sides",
        )
        .with_image("https://api.exercisedb.io/image/bicep-curl")
        .with_variations(&["Hammer", "Incline", "Concentration"]),
        Exercise::new(
            "Tricep Extension",
            MuscleGroup::Arms,
            Equipment::Cable,
            Difficulty::Beginner,
            "Tricep isolation from the cable stack",
        )
        .with_image("https://api.exercisedb.io/image/tricep-extension"),
        // Core
        Exercise::new(
            "Plank",
            MuscleGroup::Core,
            Equipment::Bodyweight,
            Difficulty::Beginner,
            "Isometric core hold; brace the trunk and squeeze the glutes",
        )
        .with_image("https://api.exercisedb.io/image/plank")
        .with_variations(&["Side Plank", "Weighted", "Long Lever"]),
        Exercise::new(
            "Russian Twist",
            MuscleGroup::Core,
            Equipment::Kettlebell,
            Difficulty::Beginner,
            "Rotational core exercise",
        )
        .with_image("https://api.exercisedb.io/image/russian-twist"),
        // Full body / conditioning
        Exercise::new(
            "Burpee",
            MuscleGroup::FullBody,
            Equipment::None,
            Difficulty::Intermediate,
            "Full-body conditioning movement combining a squat thrust and jump",
        )
        .with_image("https://api.exercisedb.io/image/burpee"),
        Exercise::new(
            "Mountain Climber",
            MuscleGroup::FullBody,
            Equipment::Bodyweight,
            Difficulty::Beginner,
            "Dynamic core and conditioning drill from a push-up position",
        )
        .with_image("https://api.exercisedb.io/image/mountain-climber"),
        Exercise::new(
            "Kettlebell Swing",
            MuscleGroup::FullBody,
            Equipment::Kettlebell,
            Difficulty::Intermediate,
            "Ballistic hip hinge; snap the hips and let the bell float",
        )
        .with_image("https://api.exercisedb.io/image/kettlebell-swing"),
    ]
}

/// The built-in plan catalog, referencing exercises from `library` by name.
/// A plan entry whose exercise is missing from the library is skipped.
pub fn default_plans(library: &[Exercise]) -> Vec<WorkoutPlan> {
    let find = |name: &str| library.iter().find(|e| e.name == name).cloned();
    let planned = |entries: &[(&str, u32, u32)]| -> Vec<PlannedExercise> {
        entries
            .iter()
            .filter_map(|&(name, sets, reps)| find(name).map(|ex| PlannedExercise::new(ex, sets, reps)))
            .collect()
    };

    vec![
        WorkoutPlan::new(
            "Full Body Workout",
            "A comprehensive full-body workout targeting all major muscle groups",
            "60 minutes",
            Difficulty::Intermediate,
            planned(&[
                ("Squat", 4, 8),
                ("Bench Press", 4, 8),
                ("Bent Over Row", 4, 8),
                ("Overhead Press", 3, 10),
                ("Romanian Deadlift", 3, 10),
            ]),
        ),
        WorkoutPlan::new(
            "Upper Body Focus",
            "Intensive upper body workout targeting chest, back, shoulders, and arms",
            "60 minutes",
            Difficulty::Intermediate,
            planned(&[
                ("Bench Press", 4, 8),
                ("Pull-up", 4, 8),
                ("Overhead Press", 3, 10),
                ("Dumbbell Row", 3, 10),
                ("Tricep Extension", 3, 12),
            ]),
        ),
        WorkoutPlan::new(
            "Lower Body Power",
            "Focus on building strength and muscle in the legs",
            "60 minutes",
            Difficulty::Intermediate,
            planned(&[
                ("Squat", 4, 8),
                ("Romanian Deadlift", 4, 8),
                ("Leg Press", 3, 12),
                ("Calf Raises", 4, 15),
                ("Leg Extension", 3, 12),
            ]),
        ),
        WorkoutPlan::new(
            "Push Day",
            "Focus on pushing movements for chest, shoulders, and triceps",
            "60 minutes",
            Difficulty::Advanced,
            planned(&[
                ("Bench Press", 4, 8),
                ("Overhead Press", 4, 8),
                ("Incline Dumbbell Press", 3, 10),
                ("Lateral Raise", 3, 12),
                ("Tricep Extension", 3, 12),
            ]),
        ),
        WorkoutPlan::new(
            "Pull Day",
            "Focus on pulling movements for back and biceps",
            "60 minutes",
            Difficulty::Advanced,
            planned(&[
                ("Deadlift", 4, 6),
                ("Pull-up", 4, 8),
                ("Bent Over Row", 3, 10),
                ("Straight Arm Pulldown", 3, 12),
                ("Bicep Curl", 3, 12),
            ]),
        ),
        WorkoutPlan::new(
            "Cardio & Endurance",
            "High-rep, low-weight workout focusing on endurance and cardiovascular health",
            "45 minutes",
            Difficulty::Beginner,
            planned(&[
                ("Bodyweight Squat", 3, 20),
                ("Push-up", 3, 15),
                ("Mountain Climber", 3, 30),
                ("Burpee", 3, 10),
                ("Plank", 3, 60),
            ]),
        ),
        WorkoutPlan::new(
            "Strength Foundations",
            "Low-rep heavy compound work built around the main barbell lifts",
            "75 minutes",
            Difficulty::Advanced,
            planned(&[
                ("Squat", 5, 5),
                ("Bench Press", 5, 5),
                ("Deadlift", 3, 5),
                ("Overhead Press", 3, 5),
            ]),
        ),
        WorkoutPlan::new(
            "Bodyweight Basics",
            "Equipment-free session for travel or home training",
            "30 minutes",
            Difficulty::Beginner,
            planned(&[
                ("Push-up", 3, 12),
                ("Bodyweight Squat", 3, 15),
                ("Plank", 3, 45),
                ("Mountain Climber", 3, 20),
            ]),
        ),
        WorkoutPlan::new(
            "Core Intensive",
            "Focused trunk work for stability and rotation",
            "30 minutes",
            Difficulty::Beginner,
            planned(&[
                ("Plank", 4, 60),
                ("Russian Twist", 3, 20),
                ("Mountain Climber", 3, 30),
            ]),
        ),
        WorkoutPlan::new(
            "Kettlebell Conditioning",
            "Ballistic full-body work with a single kettlebell",
            "40 minutes",
            Difficulty::Intermediate,
            planned(&[
                ("Kettlebell Swing", 5, 15),
                ("Bodyweight Squat", 3, 15),
                ("Russian Twist", 3, 20),
                ("Burpee", 3, 10),
            ]),
        ),
    ]
}
