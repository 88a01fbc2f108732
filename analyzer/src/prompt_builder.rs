use crate::models::AnalysisPrompt;

pub const SYSTEM_INSTRUCTION: &str = concat!(
    "You are an expert assistant specialized in analyzing and summarizing resumes. ",
    "Your task is to extract detailed personal information, educational background, ",
    "professional experience, skills, and any other relevant information from the resume. ",
    "Provide comprehensive, well-organized answers for each section of the resume, ",
    "highlighting specific details like job titles, achievements, skills, and educational qualifications. ",
    "However, do not provide any information that is not explicitly requested. ",
    "Your job is to only answer the specific questions asked by the user about the resume. ",
    "Always keep your answers precise, focused on the question being asked, and ensure accuracy."
);

const HUMAN_TEMPLATE: &str = "{text}";

#[derive(Debug, Clone)]
pub struct PromptBuilder {
    system_instruction: String,
    human_template: String,
}

impl PromptBuilder {
    pub fn new() -> Self {
        Self {
            system_instruction: SYSTEM_INSTRUCTION.to_string(),
            human_template: HUMAN_TEMPLATE.to_string(),
        }
    }

    /// Substitutes `text` into the human turn. Nothing is escaped, trimmed or
    /// truncated.
    pub fn render(&self, text: &str) -> AnalysisPrompt {
        AnalysisPrompt {
            system_instruction: self.system_instruction.clone(),
            human_message: self.human_template.replacen("{text}", text, 1),
        }
    }
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_instruction_is_verbatim() {
        assert!(SYSTEM_INSTRUCTION.starts_with(
            "You are an expert assistant specialized in analyzing and summarizing resumes. Your task"
        ));
        assert!(SYSTEM_INSTRUCTION.contains(
            "educational qualifications. However, do not provide any information that is not explicitly requested."
        ));
        assert!(SYSTEM_INSTRUCTION
            .ends_with("focused on the question being asked, and ensure accuracy."));
        assert!(!SYSTEM_INSTRUCTION.contains("  "));
    }

    #[test]
    fn human_message_is_the_input_unmodified() {
        let text = "  Jane Doe\n\nSkills: Rust, SQL  \n";
        let prompt = PromptBuilder::new().render(text);
        assert_eq!(prompt.human_message, text);
        assert_eq!(prompt.system_instruction, SYSTEM_INSTRUCTION);
    }

    #[test]
    fn placeholder_like_input_is_not_expanded_again() {
        let prompt = PromptBuilder::new().render("literal {text} in a resume");
        assert_eq!(prompt.human_message, "literal {text} in a resume");
    }

    #[test]
    fn long_input_is_not_truncated() {
        let text = "experience ".repeat(50_000);
        let prompt = PromptBuilder::new().render(&text);
        assert_eq!(prompt.human_message.len(), text.len());
    }
}
