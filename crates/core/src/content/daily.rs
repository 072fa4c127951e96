use rand::Rng;

use crate::content::ContentGenerator;
use crate::model::{Asset, Challenge, Level, Notification, OptionLabel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DailyOption {
    pub id: u8,
    pub text: &'static str,
}

impl OptionLabel for DailyOption {
    fn label(&self) -> String {
        self.text.to_owned()
    }
}

struct Question {
    prompt: &'static str,
    image: Option<&'static str>,
    options: [DailyOption; 3],
    answer: u8,
}

const fn option(id: u8, text: &'static str) -> DailyOption {
    DailyOption { id, text }
}

static QUESTIONS: [Question; 5] = [
    Question {
        prompt: "Which letter makes the 'sss' sound?",
        image: None,
        options: [option(1, "C"), option(2, "S"), option(3, "Z")],
        answer: 2,
    },
    Question {
        prompt: "Which shape has 3 sides?",
        image: None,
        options: [option(1, "Circle"), option(2, "Square"), option(3, "Triangle")],
        answer: 3,
    },
    Question {
        prompt: "How many apples do you see?",
        image: Some("🍎🍎🍎🍎"),
        options: [option(1, "3"), option(2, "4"), option(3, "5")],
        answer: 2,
    },
    Question {
        prompt: "What color is a banana?",
        image: None,
        options: [option(1, "Red"), option(2, "Green"), option(3, "Yellow")],
        answer: 3,
    },
    Question {
        prompt: "Which animal says 'Moo'?",
        image: None,
        options: [option(1, "Dog 🐕"), option(2, "Cow 🐄"), option(3, "Cat 🐱")],
        answer: 2,
    },
];

/// Number of questions in one daily challenge.
pub const DAILY_STEPS: u32 = 5;

/// Serves the day's fixed questions in order, one per step, with shuffled option order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DailyGenerator;

impl ContentGenerator for DailyGenerator {
    type Item = DailyOption;

    fn generate<R: Rng + ?Sized>(&self, level: Level, rng: &mut R) -> Challenge<DailyOption> {
        let question = &QUESTIONS[level.index().min(QUESTIONS.len() - 1)];
        let mut answer = question.options[0];
        let mut distractors = Vec::with_capacity(question.options.len() - 1);
        for option in question.options {
            if option.id == question.answer {
                answer = option;
            } else {
                distractors.push(option);
            }
        }
        let assets = question.image.map(Asset::Emoji).into_iter().collect();
        Challenge::shuffled(question.prompt, assets, answer, distractors, rng)
    }

    fn on_correct(&self, _challenge: &Challenge<DailyOption>) -> Notification {
        Notification::success("Correct!", "Great job! You got it right!")
    }

    fn on_incorrect(&self, _challenge: &Challenge<DailyOption>) -> Notification {
        Notification::destructive("Try again", "That's not the right answer. Keep trying!")
    }

    fn on_complete(&self) -> Notification {
        Notification::success(
            "Challenge Complete!",
            "You've completed today's challenge! Come back tomorrow for more!",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::seeded;

    #[test]
    fn steps_follow_the_fixed_order() {
        let mut rng = seeded(10);
        let first = DailyGenerator.generate(Level::FIRST, &mut rng);
        assert_eq!(first.answer().text, "S");
        let third = DailyGenerator.generate(Level::new(3), &mut rng);
        assert_eq!(third.answer().text, "4");
        assert_eq!(third.assets(), &[Asset::Emoji("🍎🍎🍎🍎")]);
        let last = DailyGenerator.generate(Level::new(5), &mut rng);
        assert_eq!(last.answer().text, "Cow 🐄");
    }

    #[test]
    fn every_question_has_its_answer_once() {
        let mut rng = seeded(3);
        for step in 1..=DAILY_STEPS {
            let challenge = DailyGenerator.generate(Level::new(step), &mut rng);
            assert_eq!(challenge.options().len(), 3);
            let answer = *challenge.answer();
            assert_eq!(
                challenge.options().iter().filter(|o| **o == answer).count(),
                1
            );
        }
    }
}
