use crate::types::question::{LikertQuestion, PsychometricCategory};

use PsychometricCategory::{CognitiveStyle, Interest, Motivation, Personality};

const fn item(
    id: &'static str,
    text: &'static str,
    category: PsychometricCategory,
    reverse: bool,
) -> LikertQuestion {
    LikertQuestion {
        id,
        text,
        category,
        reverse,
    }
}

pub static QUESTIONS: [LikertQuestion; 20] = [
    item("int1", "I enjoy creating consistent, reusable UI elements", Interest, false),
    item("int2", "I find satisfaction in organizing and systematizing design components", Interest, false),
    item("int3", "I'm excited about the intersection of design and development", Interest, false),
    item("int4", "I like establishing visual guidelines and standards", Interest, false),
    item("int5", "I prefer working on one-off designs rather than reusable systems", Interest, true),
    item("per1", "I pay close attention to small details and inconsistencies", Personality, false),
    item("per2", "I prefer structured, rule-based approaches to creative work", Personality, false),
    item("per3", "I enjoy collaborating with both designers and developers", Personality, false),
    item("per4", "I'm comfortable with repetitive, methodical tasks", Personality, false),
    item("per5", "I prefer complete creative freedom over working within constraints", Personality, true),
    item("cog1", "I think analytically about design decisions", CognitiveStyle, false),
    item("cog2", "I can balance creative vision with technical constraints", CognitiveStyle, false),
    item("cog3", "I enjoy solving complex organizational problems", CognitiveStyle, false),
    item("cog4", "I prefer structured workflows over open-ended exploration", CognitiveStyle, false),
    item("cog5", "I work best when I can focus purely on creative expression", CognitiveStyle, true),
    item("mot1", "I'm driven by creating order and consistency in design", Motivation, false),
    item("mot2", "I find fulfillment in improving team efficiency through better tools", Motivation, false),
    item("mot3", "I'm motivated by the technical aspects of design implementation", Motivation, false),
    item("mot4", "I enjoy mentoring others and establishing best practices", Motivation, false),
    item("mot5", "I'm primarily motivated by individual creative recognition", Motivation, true),
];

pub fn find(id: &str) -> Option<&'static LikertQuestion> {
    QUESTIONS.iter().find(|question| question.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_category_has_five_items_and_one_reverse() {
        for category in PsychometricCategory::ALL {
            let items: Vec<_> = QUESTIONS
                .iter()
                .filter(|question| question.category == category)
                .collect();
            assert_eq!(items.len(), 5, "{category:?}");
            assert_eq!(items.iter().filter(|question| question.reverse).count(), 1);
        }
    }
}
