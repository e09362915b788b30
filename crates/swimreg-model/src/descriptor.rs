use serde::{Deserialize, Serialize};

/// Marker term identifying private-lesson programs, matched case-insensitively.
pub const PRIVATE_LESSON_MARKER: &str = "private";

/// Structured form of one user-selected class.
///
/// Produced by the descriptor parser from a composed selection string such as
/// `"Stage 2 (Monday, 9:00 AM)"`. Immutable once parsed; `day` and `time`
/// may be empty when the selection string carried no schedule information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDescriptor {
    /// The original selection string, unmodified.
    pub full_name: String,
    /// Program portion, e.g. `"Stage 2"` or `"Private Swim Lessons"`.
    pub program: String,
    /// Day-of-week portion, possibly empty.
    pub day: String,
    /// Time portion, possibly empty.
    pub time: String,
    /// True when the program names a private lesson.
    pub is_private_lesson: bool,
}

impl ClassDescriptor {
    pub fn new(full_name: String, program: String, day: String, time: String) -> Self {
        let is_private_lesson = program.to_lowercase().contains(PRIVATE_LESSON_MARKER);
        Self {
            full_name,
            program,
            day,
            time,
            is_private_lesson,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn private_lesson_flag_is_case_insensitive() {
        let d = ClassDescriptor::new(
            "PRIVATE Swim Lessons (Monday, 4:00 PM)".to_string(),
            "PRIVATE Swim Lessons".to_string(),
            "Monday".to_string(),
            "4:00 PM".to_string(),
        );
        assert!(d.is_private_lesson);

        let d = ClassDescriptor::new(
            "Stage 3".to_string(),
            "Stage 3".to_string(),
            String::new(),
            String::new(),
        );
        assert!(!d.is_private_lesson);
    }
}
