// ABOUTME: Workout template matrix keyed by goal type and training level
// ABOUTME: Also holds the ordered equipment substitution rules for bodyweight-only users
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Workout templates and equipment substitution rules.
//!
//! Templates have different lengths on purpose: the synthesizer trims to the
//! requested training days and never repeats a template to fill the week.

use fitplan_core::models::{GoalType, TrainingLevel, Workout};

/// A template training day
#[derive(Debug, Clone, Copy)]
pub struct WorkoutTemplate {
    /// Day label
    pub day: &'static str,
    /// Session name
    pub name: &'static str,
    /// Ordered exercise prescriptions
    pub exercises: &'static [&'static str],
}

impl WorkoutTemplate {
    /// Owned copy for a plan
    #[must_use]
    pub fn to_workout(&self) -> Workout {
        Workout {
            day: self.day.to_owned(),
            name: self.name.to_owned(),
            exercises: self.exercises.iter().map(|&e| e.to_owned()).collect(),
            caution: None,
        }
    }
}

/// First-match substitution rule for an equipment-based exercise
#[derive(Debug, Clone, Copy)]
pub struct SubstitutionRule {
    /// Lowercase fragment looked up in the exercise name
    pub keyword: &'static str,
    /// Bodyweight replacement
    pub replacement: &'static str,
}

/// Exercises naming any of these need equipment
pub const EQUIPMENT_KEYWORDS: &[&str] = &["barbell", "dumbbell", "kettlebell", "machine"];

/// Ordered substitution rules; the first matching keyword wins
pub const SUBSTITUTION_RULES: &[SubstitutionRule] = &[
    SubstitutionRule {
        keyword: "squat",
        replacement: "Bodyweight squats",
    },
    SubstitutionRule {
        keyword: "press",
        replacement: "Push-ups",
    },
    SubstitutionRule {
        keyword: "row",
        replacement: "Resistance band rows",
    },
    SubstitutionRule {
        keyword: "curl",
        replacement: "Bodyweight curls",
    },
    SubstitutionRule {
        keyword: "deadlift",
        replacement: "Glute bridges",
    },
];

/// Replacement when no rule matches
pub const FALLBACK_SUBSTITUTE: &str = "Bodyweight alternative";

/// Human-readable training style for a goal
#[must_use]
pub const fn training_type(goal: GoalType) -> &'static str {
    match goal {
        GoalType::LoseWeight => "HIIT & Cardio",
        GoalType::BuildMuscle => "Strength Training",
        GoalType::IncreaseEndurance => "Endurance Training",
        GoalType::ImproveFlexibility => "Mobility & Flexibility",
        GoalType::GeneralFitness => "General Fitness",
    }
}

/// Template for a goal/level cell of the matrix
#[must_use]
pub const fn template_for(goal: GoalType, level: TrainingLevel) -> &'static [WorkoutTemplate] {
    match (goal, level) {
        (GoalType::LoseWeight, TrainingLevel::Beginner) => LOSE_WEIGHT_BEGINNER,
        (GoalType::LoseWeight, TrainingLevel::Intermediate) => LOSE_WEIGHT_INTERMEDIATE,
        (GoalType::LoseWeight, TrainingLevel::Advanced) => LOSE_WEIGHT_ADVANCED,
        (GoalType::BuildMuscle, TrainingLevel::Beginner) => BUILD_MUSCLE_BEGINNER,
        (GoalType::BuildMuscle, TrainingLevel::Intermediate) => BUILD_MUSCLE_INTERMEDIATE,
        (GoalType::BuildMuscle, TrainingLevel::Advanced) => BUILD_MUSCLE_ADVANCED,
        (GoalType::IncreaseEndurance, TrainingLevel::Beginner) => ENDURANCE_BEGINNER,
        (GoalType::IncreaseEndurance, TrainingLevel::Intermediate) => ENDURANCE_INTERMEDIATE,
        (GoalType::IncreaseEndurance, TrainingLevel::Advanced) => ENDURANCE_ADVANCED,
        (GoalType::ImproveFlexibility, TrainingLevel::Beginner) => FLEXIBILITY_BEGINNER,
        (GoalType::ImproveFlexibility, TrainingLevel::Intermediate) => FLEXIBILITY_INTERMEDIATE,
        (GoalType::ImproveFlexibility, TrainingLevel::Advanced) => FLEXIBILITY_ADVANCED,
        (GoalType::GeneralFitness, TrainingLevel::Beginner) => GENERAL_BEGINNER,
        (GoalType::GeneralFitness, TrainingLevel::Intermediate) => GENERAL_INTERMEDIATE,
        (GoalType::GeneralFitness, TrainingLevel::Advanced) => GENERAL_ADVANCED,
    }
}

const fn day(
    day: &'static str,
    name: &'static str,
    exercises: &'static [&'static str],
) -> WorkoutTemplate {
    WorkoutTemplate {
        day,
        name,
        exercises,
    }
}

// ============================================================================
// Lose weight
// ============================================================================

const LOSE_WEIGHT_BEGINNER: &[WorkoutTemplate] = &[
    day(
        "Monday",
        "Full Body Circuit",
        &[
            "Bodyweight squats 3x12",
            "Dumbbell chest press 3x10",
            "Brisk walk 20 min",
            "Plank 3x30s",
        ],
    ),
    day(
        "Wednesday",
        "Cardio Intervals",
        &[
            "Stationary bike intervals 10x30s",
            "Step-ups 3x10 per leg",
            "Mountain climbers 3x20",
        ],
    ),
    day(
        "Friday",
        "Strength and Burn",
        &[
            "Kettlebell deadlift 3x10",
            "Dumbbell bent-over row 3x10",
            "Jumping jacks 3x30s",
        ],
    ),
];

const LOSE_WEIGHT_INTERMEDIATE: &[WorkoutTemplate] = &[
    day(
        "Monday",
        "HIIT Circuit",
        &[
            "Kettlebell swings 4x15",
            "Burpees 4x10",
            "Dumbbell thrusters 3x12",
            "Jump rope 5x1 min",
        ],
    ),
    day(
        "Tuesday",
        "Lower Body Burn",
        &[
            "Barbell back squat 4x10",
            "Walking lunges 3x12 per leg",
            "Box jumps 3x8",
        ],
    ),
    day(
        "Thursday",
        "Upper Body Burn",
        &[
            "Dumbbell shoulder press 3x12",
            "Barbell bent-over row 3x10",
            "Push-ups 3x15",
            "Battle ropes 5x30s",
        ],
    ),
    day(
        "Saturday",
        "Steady-State Cardio",
        &["Incline treadmill walk 35 min", "Plank 3x45s"],
    ),
];

const LOSE_WEIGHT_ADVANCED: &[WorkoutTemplate] = &[
    day(
        "Monday",
        "Metabolic Conditioning",
        &[
            "Barbell complex 5x6",
            "Kettlebell swings 5x20",
            "Rowing machine sprints 8x250m",
            "Burpees 4x15",
        ],
    ),
    day(
        "Tuesday",
        "Lower Body Strength",
        &[
            "Barbell front squat 5x6",
            "Dumbbell Romanian deadlift 4x10",
            "Sled push 6x20m",
        ],
    ),
    day(
        "Wednesday",
        "Tabata Cardio",
        &[
            "Assault bike Tabata 8x20s",
            "Jump squats 4x15",
            "Mountain climbers 4x30s",
        ],
    ),
    day(
        "Friday",
        "Upper Body Strength",
        &[
            "Barbell bench press 5x6",
            "Weighted pull-ups 4x6",
            "Dumbbell row 4x10",
        ],
    ),
    day(
        "Saturday",
        "Long Cardio",
        &["Zone 2 run 45 min", "Core circuit 3 rounds"],
    ),
];

// ============================================================================
// Build muscle
// ============================================================================

const BUILD_MUSCLE_BEGINNER: &[WorkoutTemplate] = &[
    day(
        "Monday",
        "Full Body A",
        &[
            "Goblet squat with dumbbell 3x10",
            "Dumbbell bench press 3x10",
            "Seated cable row machine 3x10",
            "Plank 3x30s",
        ],
    ),
    day(
        "Wednesday",
        "Full Body B",
        &[
            "Dumbbell Romanian deadlift 3x10",
            "Dumbbell shoulder press 3x10",
            "Lat pulldown machine 3x10",
        ],
    ),
    day(
        "Friday",
        "Full Body C",
        &[
            "Leg press machine 3x12",
            "Push-ups 3x max",
            "Dumbbell biceps curl 3x12",
        ],
    ),
];

const BUILD_MUSCLE_INTERMEDIATE: &[WorkoutTemplate] = &[
    day(
        "Monday",
        "Upper Body Push",
        &[
            "Barbell bench press 4x8",
            "Dumbbell incline press 3x10",
            "Dumbbell lateral raise 3x12",
            "Triceps dips 3x10",
        ],
    ),
    day(
        "Tuesday",
        "Lower Body",
        &[
            "Barbell back squat 4x8",
            "Barbell Romanian deadlift 3x10",
            "Walking lunges 3x12 per leg",
        ],
    ),
    day(
        "Thursday",
        "Upper Body Pull",
        &[
            "Barbell bent-over row 4x8",
            "Pull-ups 3x8",
            "Dumbbell hammer curl 3x12",
        ],
    ),
    day(
        "Friday",
        "Lower Body Hypertrophy",
        &[
            "Leg press machine 4x12",
            "Leg curl machine 3x12",
            "Standing calf raise machine 3x15",
        ],
    ),
];

const BUILD_MUSCLE_ADVANCED: &[WorkoutTemplate] = &[
    day(
        "Monday",
        "Chest and Triceps",
        &[
            "Barbell bench press 5x5",
            "Dumbbell incline press 4x8",
            "Cable fly machine 3x12",
            "Weighted dips 3x8",
        ],
    ),
    day(
        "Tuesday",
        "Back and Biceps",
        &[
            "Barbell deadlift 5x5",
            "Barbell bent-over row 4x8",
            "Weighted pull-ups 4x6",
            "Barbell curl 3x10",
        ],
    ),
    day(
        "Wednesday",
        "Legs",
        &[
            "Barbell back squat 5x5",
            "Barbell Romanian deadlift 4x8",
            "Leg press machine 3x12",
        ],
    ),
    day(
        "Friday",
        "Shoulders",
        &[
            "Barbell overhead press 5x5",
            "Dumbbell lateral raise 4x12",
            "Face pulls 3x15",
        ],
    ),
    day(
        "Saturday",
        "Arms and Conditioning",
        &[
            "Dumbbell curl 4x10",
            "Dumbbell skull crushers 4x10",
            "Sled drag 5x20m",
        ],
    ),
];

// ============================================================================
// Increase endurance
// ============================================================================

const ENDURANCE_BEGINNER: &[WorkoutTemplate] = &[
    day(
        "Monday",
        "Easy Run",
        &["Walk-run intervals 25 min", "Calf raises 2x15"],
    ),
    day(
        "Wednesday",
        "Cross Training",
        &[
            "Stationary bike 30 min",
            "Bodyweight squats 2x15",
            "Plank 2x30s",
        ],
    ),
    day("Saturday", "Long Walk", &["Brisk walk 45 min"]),
];

const ENDURANCE_INTERMEDIATE: &[WorkoutTemplate] = &[
    day(
        "Monday",
        "Tempo Run",
        &["Warm-up jog 10 min", "Tempo run 20 min", "Cool-down 5 min"],
    ),
    day(
        "Wednesday",
        "Strength for Runners",
        &[
            "Dumbbell split squat 3x10",
            "Kettlebell deadlift 3x10",
            "Single-leg calf raises 3x15",
        ],
    ),
    day(
        "Friday",
        "Intervals",
        &["Track repeats 6x400m", "Walking recovery 90s"],
    ),
    day("Sunday", "Long Run", &["Easy run 60 min"]),
];

const ENDURANCE_ADVANCED: &[WorkoutTemplate] = &[
    day(
        "Monday",
        "Threshold Session",
        &["Threshold intervals 3x10 min", "Strides 6x100m"],
    ),
    day(
        "Tuesday",
        "Recovery Spin",
        &["Easy cycling 45 min", "Mobility flow 10 min"],
    ),
    day(
        "Wednesday",
        "VO2max Intervals",
        &["Hill repeats 8x90s", "Core circuit 3 rounds"],
    ),
    day(
        "Friday",
        "Strength Endurance",
        &[
            "Barbell back squat 4x6",
            "Kettlebell swings 4x20",
            "Rowing machine 2000m",
        ],
    ),
    day("Sunday", "Long Run", &["Long run 90 min at easy pace"]),
];

// ============================================================================
// Improve flexibility
// ============================================================================

const FLEXIBILITY_BEGINNER: &[WorkoutTemplate] = &[
    day(
        "Monday",
        "Gentle Mobility",
        &[
            "Cat-cow 2x10",
            "Hip flexor stretch 2x30s per side",
            "Child's pose 2x45s",
        ],
    ),
    day(
        "Wednesday",
        "Beginner Yoga",
        &[
            "Sun salutation A x3",
            "Downward dog 3x30s",
            "Seated forward fold 3x30s",
        ],
    ),
    day(
        "Friday",
        "Stretch and Breathe",
        &[
            "Hamstring stretch 3x30s",
            "Thoracic rotations 2x10 per side",
            "Box breathing 5 min",
        ],
    ),
];

const FLEXIBILITY_INTERMEDIATE: &[WorkoutTemplate] = &[
    day(
        "Monday",
        "Vinyasa Flow",
        &[
            "Sun salutation B x5",
            "Warrior sequence 10 min",
            "Pigeon pose 2x60s per side",
        ],
    ),
    day(
        "Wednesday",
        "Mobility Strength",
        &[
            "Kettlebell halo 3x10",
            "Cossack squats 3x8 per side",
            "Jefferson curl with dumbbell 3x8",
        ],
    ),
    day(
        "Friday",
        "Deep Stretch",
        &[
            "Couch stretch 2x60s per side",
            "Frog stretch 2x60s",
            "Shoulder dislocates with band 3x12",
        ],
    ),
];

const FLEXIBILITY_ADVANCED: &[WorkoutTemplate] = &[
    day(
        "Monday",
        "Power Yoga",
        &["Power yoga flow 45 min", "Crow pose practice 5 min"],
    ),
    day(
        "Tuesday",
        "Loaded Mobility",
        &[
            "Barbell good mornings 3x10",
            "Kettlebell Turkish get-up 3x3 per side",
            "Dumbbell overhead squat 3x8",
        ],
    ),
    day(
        "Thursday",
        "Splits Training",
        &[
            "Front split progressions 15 min",
            "Middle split progressions 15 min",
        ],
    ),
    day("Saturday", "Restorative Yin", &["Yin yoga 60 min"]),
];

// ============================================================================
// General fitness
// ============================================================================

const GENERAL_BEGINNER: &[WorkoutTemplate] = &[
    day(
        "Monday",
        "Full Body Basics",
        &[
            "Bodyweight squats 3x12",
            "Incline push-ups 3x10",
            "Dumbbell row 3x10",
            "Plank 3x20s",
        ],
    ),
    day(
        "Wednesday",
        "Cardio and Core",
        &["Brisk walk 30 min", "Dead bugs 3x10", "Bird dogs 3x10"],
    ),
    day(
        "Friday",
        "Full Body Strength",
        &[
            "Dumbbell goblet squat 3x10",
            "Dumbbell floor press 3x10",
            "Glute bridges 3x12",
        ],
    ),
];

const GENERAL_INTERMEDIATE: &[WorkoutTemplate] = &[
    day(
        "Monday",
        "Upper Body",
        &[
            "Dumbbell bench press 3x10",
            "Dumbbell row 3x10",
            "Dumbbell shoulder press 3x10",
        ],
    ),
    day("Tuesday", "Cardio", &["Jog 30 min", "Jump rope 5x1 min"]),
    day(
        "Thursday",
        "Lower Body",
        &[
            "Barbell back squat 3x8",
            "Kettlebell deadlift 3x10",
            "Walking lunges 3x10 per leg",
        ],
    ),
    day(
        "Saturday",
        "Active Recovery",
        &["Yoga flow 30 min", "Foam rolling 10 min"],
    ),
];

const GENERAL_ADVANCED: &[WorkoutTemplate] = &[
    day(
        "Monday",
        "Strength",
        &[
            "Barbell back squat 5x5",
            "Barbell bench press 5x5",
            "Barbell row 5x5",
        ],
    ),
    day(
        "Tuesday",
        "Conditioning",
        &[
            "Kettlebell swings 5x20",
            "Box jumps 4x8",
            "Rowing machine intervals 6x500m",
        ],
    ),
    day("Wednesday", "Mobility", &["Yoga flow 40 min"]),
    day(
        "Friday",
        "Power",
        &[
            "Barbell power clean 5x3",
            "Barbell push press 4x5",
            "Medicine ball slams 4x10",
        ],
    ),
    day(
        "Saturday",
        "Endurance",
        &["Run 50 min at conversational pace"],
    ),
];
