//! Technique bundles and break strategies.

use crate::models::{BreakPace, LearningStyle, Technique};

struct Bundle {
    primary_method: &'static str,
    resources: &'static str,
}

const VISUAL: Bundle = Bundle {
    primary_method: "Mind maps, color-coded notes and diagrams that turn each topic into a picture",
    resources: "Video lessons, infographics, illustrated flashcards and annotated past papers",
};

const AUDITORY: Bundle = Bundle {
    primary_method: "Explain each concept out loud and talk problems through with a study partner",
    resources: "Recorded lectures, educational podcasts, study groups and read-aloud summaries",
};

const KINESTHETIC: Bundle = Bundle {
    primary_method: "Learn by doing: worked problems, experiments and writing notes by hand",
    resources: "Practice problem sets, lab activities, interactive simulations and physical flashcards",
};

const MIXED: Bundle = Bundle {
    primary_method: "Active recall with spaced repetition across a mix of formats",
    resources: "Practice tests, summary sheets, short videos and flashcards",
};

const FREQUENT_BREAKS: &str = "Study in 20-minute focus blocks with a 5-minute break after each one, \
     and take a 20-minute break after every 2 blocks. Step away from screens during breaks.";

const STANDARD_BREAKS: &str = "Study in 25-minute focus blocks with a 5-minute break after each one, \
     and take a 15-minute break after every 4 blocks.";

/// Builds the technique bundle for a learning style and break pace.
pub fn select_technique(style: LearningStyle, pace: BreakPace) -> Technique {
    let bundle = match style {
        LearningStyle::Visual => VISUAL,
        LearningStyle::Auditory => AUDITORY,
        LearningStyle::Kinesthetic => KINESTHETIC,
        LearningStyle::Mixed => MIXED,
    };

    let break_strategy = match pace {
        BreakPace::Frequent => FREQUENT_BREAKS,
        BreakPace::Standard => STANDARD_BREAKS,
    };

    Technique {
        style,
        primary_method: bundle.primary_method.to_string(),
        resources: bundle.resources.to_string(),
        break_strategy: break_strategy.to_string(),
        pace,
    }
}
