//! Assistant side panel: tabs, question draft, canned answers and notes
//!
//! There is no model behind the panel. Answers echo the question together
//! with the parts currently marked for analysis.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AssistantTab {
    #[default]
    Explain,
    Function,
    Assembly,
    Theory,
}

impl AssistantTab {
    pub const ALL: [AssistantTab; 4] = [
        AssistantTab::Explain,
        AssistantTab::Function,
        AssistantTab::Assembly,
        AssistantTab::Theory,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            AssistantTab::Explain => "Explain",
            AssistantTab::Function => "Function",
            AssistantTab::Assembly => "Assembly",
            AssistantTab::Theory => "Theory",
        }
    }

    /// Placeholder text shown before any question is asked
    pub fn hint(&self) -> &'static str {
        match self {
            AssistantTab::Explain => "Select a part or ask a question about the model.",
            AssistantTab::Function => "Explains what each part does and how it works.",
            AssistantTab::Assembly => "Walks through the assembly order and how parts are joined.",
            AssistantTab::Theory => "Covers the engineering theory behind the mechanism.",
        }
    }
}

/// A question and the answer it received
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exchange {
    pub tab: AssistantTab,
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Default)]
pub struct AssistantPanel {
    tab: AssistantTab,
    draft: String,
    notes: String,
    transcript: Vec<Exchange>,
}

impl AssistantPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tab(&self) -> AssistantTab {
        self.tab
    }

    pub fn set_tab(&mut self, tab: AssistantTab) {
        self.tab = tab;
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn set_notes(&mut self, text: impl Into<String>) {
        self.notes = text.into();
    }

    pub fn transcript(&self) -> &[Exchange] {
        &self.transcript
    }

    /// Answer the current draft with the given analysis context
    ///
    /// A blank draft is ignored. The draft is cleared after asking.
    pub fn ask(&mut self, context: &[&str]) -> Option<&Exchange> {
        let question = self.draft.trim();
        if question.is_empty() {
            return None;
        }

        let subject = if context.is_empty() {
            "the whole assembly".to_string()
        } else {
            format!("'{}'", context.join(", "))
        };
        let answer = format!(
            "[Study assistant] Currently analysing {subject}. About '{question}': \
             this region can concentrate stress in simulation, so check it carefully when designing."
        );

        self.transcript.push(Exchange {
            tab: self.tab,
            question: question.to_string(),
            answer,
        });
        self.draft.clear();
        self.transcript.last()
    }
}
