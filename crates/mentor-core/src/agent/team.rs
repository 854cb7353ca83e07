//! The built-in teaching team

use super::spec::AgentSpec;

/// Builds the knowledge base for a topic from first principles
pub fn professor() -> AgentSpec {
    AgentSpec::new("Professor", "Research and Knowledge Specialist")
        .with_heading("📚 Professor's Knowledge Base")
        .with_instruction("Create a comprehensive knowledge base for the given topic.")
        .with_instruction("Explain the topic from first principles.")
        .with_instruction("Format it in a clear and concise way.")
}

/// Lays out a learning roadmap
pub fn academic_advisor() -> AgentSpec {
    AgentSpec::new("Academic Advisor", "Learning Path Designer")
        .with_heading("🗺 Academic Advisor's Roadmap")
        .with_instruction("Break down the topic into logical subtopics.")
        .with_instruction("Present the roadmap in a structured format.")
}

/// Finds learning resources on the web
pub fn research_librarian() -> AgentSpec {
    AgentSpec::new("Research Librarian", "Learning Resource Specialist")
        .with_heading("🔍 Research Librarian's Resources")
        .with_instruction("List high-quality learning resources for the topic.")
        .with_instruction("Use the web_search tool to find relevant links.")
        .with_search_tool()
        .with_tool_calls_shown()
}

/// Writes practice exercises with worked solutions
pub fn teaching_assistant() -> AgentSpec {
    AgentSpec::new("Teaching Assistant", "Exercise Creator")
        .with_heading("✏️ Teaching Assistant's Exercises")
        .with_instruction("Create practice exercises for the topic.")
        .with_instruction("Include example problems and solutions.")
        .with_search_tool()
        .with_tool_calls_shown()
}

/// The four roles in presentation order
pub fn teaching_team() -> Vec<AgentSpec> {
    vec![
        professor(),
        academic_advisor(),
        research_librarian(),
        teaching_assistant(),
    ]
}
