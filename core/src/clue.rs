use alloc::string::String;
use alloc::vec::Vec;

/// What a board cell currently displays for its clue.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Showing {
    Hidden,
    Question,
    Answer,
}

impl Showing {
    pub const fn is_answered(self) -> bool {
        matches!(self, Self::Answer)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    ShowedQuestion,
    ShowedAnswer,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            ShowedQuestion => true,
            ShowedAnswer => true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Clue {
    pub question: String,
    pub answer: String,
    showing: Showing,
}

impl Clue {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            showing: Showing::Hidden,
        }
    }

    pub fn showing(&self) -> Showing {
        self.showing
    }

    /// Advances `Hidden -> Question -> Answer`, the answer is terminal.
    pub fn reveal(&mut self) -> RevealOutcome {
        use Showing::*;
        let (next, outcome) = match self.showing {
            Hidden => (Question, RevealOutcome::ShowedQuestion),
            Question => (Answer, RevealOutcome::ShowedAnswer),
            Answer => return RevealOutcome::NoChange,
        };
        self.showing = next;
        outcome
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Category {
    title: String,
    clues: Vec<Clue>,
}

impl Category {
    pub fn new(title: impl Into<String>, clues: Vec<Clue>) -> Self {
        Self {
            title: title.into(),
            clues,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }

    pub(crate) fn clue_mut(&mut self, index: usize) -> Option<&mut Clue> {
        self.clues.get_mut(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn reveal_walks_question_then_answer() {
        let mut clue = Clue::new("2+2", "4");
        let mut seen = vec![clue.showing()];

        for _ in 0..4 {
            clue.reveal();
            seen.push(clue.showing());
        }

        use Showing::*;
        assert_eq!(seen, vec![Hidden, Question, Answer, Answer, Answer]);
    }

    #[test]
    fn reveal_reports_no_change_once_answered() {
        let mut clue = Clue::new("Hamlet author", "Shakespeare");

        assert_eq!(clue.reveal(), RevealOutcome::ShowedQuestion);
        assert_eq!(clue.reveal(), RevealOutcome::ShowedAnswer);
        assert_eq!(clue.reveal(), RevealOutcome::NoChange);
        assert!(!RevealOutcome::NoChange.has_update());
        assert!(clue.showing().is_answered());
    }
}
