//! System prompt assembly

use super::spec::AgentSpec;

/// Build the system instruction for an agent
pub fn system_prompt(spec: &AgentSpec) -> String {
    let mut prompt = format!("Your name is {}.\n\n", spec.name);

    prompt.push_str("<your_role>\n");
    prompt.push_str(spec.role.trim());
    prompt.push_str("\n</your_role>\n");

    if !spec.instructions.is_empty() {
        prompt.push_str("\n<instructions>\n");
        for instruction in &spec.instructions {
            prompt.push_str("- ");
            prompt.push_str(instruction.trim());
            prompt.push('\n');
        }
        prompt.push_str("</instructions>\n");
    }

    if spec.markdown {
        prompt.push_str(
            "\n<additional_information>\n- Use markdown to format your answers.\n</additional_information>\n",
        );
    }

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_lists_instructions_in_order() {
        let spec = AgentSpec::new("Professor", "Knowledge Specialist")
            .with_instruction("First.")
            .with_instruction("Second.");
        let prompt = system_prompt(&spec);

        assert!(prompt.starts_with("Your name is Professor."));
        assert!(prompt.contains("<your_role>\nKnowledge Specialist\n</your_role>"));
        let first = prompt.find("- First.").unwrap();
        let second = prompt.find("- Second.").unwrap();
        assert!(first < second);
        assert!(prompt.contains("Use markdown"));
    }

    #[test]
    fn test_prompt_without_markdown() {
        let mut spec = AgentSpec::new("Plain", "Writer");
        spec.markdown = false;
        let prompt = system_prompt(&spec);
        assert!(!prompt.contains("markdown"));
        assert!(!prompt.contains("<instructions>"));
    }
}
