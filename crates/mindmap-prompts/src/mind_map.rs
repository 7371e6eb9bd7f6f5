/// Append full-breakdown instructions for `central_idea` to the prompt.
pub fn append_instructions(prompt: &mut String, central_idea: &str) {
    prompt.push_str(&format!(
        "Create a detailed project breakdown for: '{central_idea}'.\n\n"
    ));
    prompt.push_str(
        "I need a structured list of the tasks and components needed to complete \
         this project or goal.\n\n\
         Return a JSON object with the following structure:\n",
    );
    prompt.push_str(&format!(
        r#"{{
    "central": "{central_idea}",
    "subtopics": [
        {{
            "name": "First major task or component needed",
            "children": [
                {{"name": "Specific action item 1"}},
                {{"name": "Specific action item 2"}}
            ]
        }},
        {{
            "name": "Second major task or component needed",
            "children": [
                {{"name": "Specific action item 1"}},
                {{"name": "Specific action item 2"}}
            ]
        }}
    ]
}}"#
    ));
    prompt.push_str("\n\n");
    prompt.push_str(&format!(
        "Generate 5-7 major tasks or components with 2-3 specific action items each. \
         Make each task specific, actionable, and directly related to implementing \
         {central_idea}. Focus on concrete work that would be required to build or \
         deliver this project. Do not use placeholders like \"Task 1\" or \"Step 2\"; \
         use specific, action-oriented descriptions.\n"
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt_for(idea: &str) -> String {
        let mut prompt = String::new();
        append_instructions(&mut prompt, idea);
        prompt
    }

    #[test]
    fn states_cardinality() {
        let prompt = prompt_for("Build a website");
        assert!(prompt.contains("5-7 major tasks"));
        assert!(prompt.contains("2-3 specific action items"));
    }

    #[test]
    fn example_shape_has_two_entries() {
        let prompt = prompt_for("Build a website");
        assert_eq!(prompt.matches("\"children\"").count(), 2);
        assert!(prompt.contains("\"central\": \"Build a website\""));
    }

    #[test]
    fn warns_against_placeholders() {
        assert!(prompt_for("x").contains("Do not use placeholders"));
    }
}
