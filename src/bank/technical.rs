use crate::types::question::{ChoiceFormat, ChoiceOption, CorrectnessQuestion, TechnicalCategory};

use ChoiceFormat::{MultipleChoice, Scenario};
use TechnicalCategory::{DomainSpecific, GeneralAptitude, PrerequisiteKnowledge};

pub static QUESTIONS: [CorrectnessQuestion; 9] = [
    CorrectnessQuestion {
        id: "apt1",
        text: "If a design system has 8 base components and each component has 3 variants, and you need to create documentation for each variant, how many documentation pages will you create?",
        category: GeneralAptitude,
        format: MultipleChoice,
        options: &[
            ChoiceOption { key: "8", label: "8" },
            ChoiceOption { key: "11", label: "11" },
            ChoiceOption { key: "24", label: "24" },
            ChoiceOption { key: "32", label: "32" },
        ],
        correct: "24",
    },
    CorrectnessQuestion {
        id: "apt2",
        text: "Which pattern comes next in this sequence: Button → Input → Card → ?",
        category: GeneralAptitude,
        format: MultipleChoice,
        options: &[
            ChoiceOption { key: "Modal", label: "Modal" },
            ChoiceOption { key: "Icon", label: "Icon" },
            ChoiceOption { key: "Text", label: "Text" },
            ChoiceOption { key: "Form", label: "Form" },
        ],
        correct: "Modal",
    },
    CorrectnessQuestion {
        id: "apt3",
        text: "A design token hierarchy has 4 levels. If Level 1 has 2 values, Level 2 has 3x Level 1, Level 3 has 2x Level 2, and Level 4 has 1.5x Level 3, what's the total number of tokens?",
        category: GeneralAptitude,
        format: MultipleChoice,
        options: &[
            ChoiceOption { key: "26", label: "26" },
            ChoiceOption { key: "32", label: "32" },
            ChoiceOption { key: "36", label: "36" },
            ChoiceOption { key: "42", label: "42" },
        ],
        correct: "32",
    },
    CorrectnessQuestion {
        id: "pre1",
        text: "What does CSS-in-JS primarily help with in component-based design systems?",
        category: PrerequisiteKnowledge,
        format: MultipleChoice,
        options: &[
            ChoiceOption { key: "styling", label: "Scoped styling and dynamic theming" },
            ChoiceOption { key: "performance", label: "Faster page loading" },
            ChoiceOption { key: "accessibility", label: "Better screen reader support" },
            ChoiceOption { key: "seo", label: "Search engine optimization" },
        ],
        correct: "styling",
    },
    CorrectnessQuestion {
        id: "pre2",
        text: "In responsive design, what does 'mobile-first' approach mean?",
        category: PrerequisiteKnowledge,
        format: MultipleChoice,
        options: &[
            ChoiceOption { key: "mobile-only", label: "Designing only for mobile devices" },
            ChoiceOption { key: "mobile-primary", label: "Starting with mobile styles and progressively enhancing" },
            ChoiceOption { key: "mobile-separate", label: "Creating separate mobile versions" },
            ChoiceOption { key: "mobile-last", label: "Adding mobile styles at the end" },
        ],
        correct: "mobile-primary",
    },
    CorrectnessQuestion {
        id: "pre3",
        text: "What is the primary purpose of semantic HTML in design systems?",
        category: PrerequisiteKnowledge,
        format: MultipleChoice,
        options: &[
            ChoiceOption { key: "performance", label: "Faster rendering" },
            ChoiceOption { key: "styling", label: "Easier CSS targeting" },
            ChoiceOption { key: "accessibility", label: "Better accessibility and meaning" },
            ChoiceOption { key: "seo", label: "Search engine ranking" },
        ],
        correct: "accessibility",
    },
    CorrectnessQuestion {
        id: "dom1",
        text: "You're implementing a design system for a team of 20 developers. One developer requests a custom button variant that only they will use. What's the best approach?",
        category: DomainSpecific,
        format: Scenario,
        options: &[
            ChoiceOption { key: "add-immediately", label: "Add it immediately to keep the developer happy" },
            ChoiceOption { key: "assess-reusability", label: "Assess if it could be useful for others, propose alternatives first" },
            ChoiceOption { key: "reject-outright", label: "Reject it to maintain consistency" },
            ChoiceOption { key: "create-separate", label: "Create a separate component library for exceptions" },
        ],
        correct: "assess-reusability",
    },
    CorrectnessQuestion {
        id: "dom2",
        text: "Your design system's color tokens need to work across web, iOS, and Android. What's the most effective approach?",
        category: DomainSpecific,
        format: Scenario,
        options: &[
            ChoiceOption { key: "platform-specific", label: "Create separate color systems for each platform" },
            ChoiceOption { key: "universal-tokens", label: "Define universal tokens with platform-specific implementations" },
            ChoiceOption { key: "web-first", label: "Use web colors and adapt them later" },
            ChoiceOption { key: "design-tools", label: "Let each platform team choose from design tool palettes" },
        ],
        correct: "universal-tokens",
    },
    CorrectnessQuestion {
        id: "dom3",
        text: "A component in your system needs to be updated with breaking changes. How do you manage this transition?",
        category: DomainSpecific,
        format: Scenario,
        options: &[
            ChoiceOption { key: "immediate-update", label: "Update immediately and notify teams" },
            ChoiceOption { key: "versioned-migration", label: "Version the component, provide migration guide and timeline" },
            ChoiceOption { key: "duplicate-component", label: "Create a new component with a different name" },
            ChoiceOption { key: "gradual-change", label: "Make gradual changes without versioning" },
        ],
        correct: "versioned-migration",
    },
];

pub fn find(id: &str) -> Option<&'static CorrectnessQuestion> {
    QUESTIONS.iter().find(|question| question.id == id)
}
