/// Append single-topic expansion instructions to the prompt.
pub fn append_instructions(prompt: &mut String, topic: &str) {
    prompt.push_str(&format!(
        "Break down this task or component into specific action items: '{topic}'\n\n\
         Return a JSON array with 3-5 specific steps in the following structure:\n"
    ));
    prompt.push_str(&format!(
        r#"[
    {{"name": "First specific step to accomplish {topic}"}},
    {{"name": "Second concrete action needed for {topic}"}}
]"#
    ));
    prompt.push_str("\n\n");
    prompt.push_str(&format!(
        "Make each step specific, actionable, and directly related to completing {topic}. \
         Each step should be concrete enough that someone would know exactly what to do. \
         Start each step with an action verb. \
         Do not use generic names like \"Step 1\" or \"Subtask\".\n"
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn states_cardinality_and_shape() {
        let mut prompt = String::new();
        append_instructions(&mut prompt, "design a logo");
        assert!(prompt.contains("3-5 specific steps"));
        assert!(prompt.contains("JSON array"));
        assert_eq!(prompt.matches("{\"name\":").count(), 2);
        assert!(prompt.contains("'design a logo'"));
    }

    #[test]
    fn appends_to_existing_prompt() {
        let mut prompt = String::from("# Context\n\n");
        append_instructions(&mut prompt, "x");
        assert!(prompt.starts_with("# Context\n\nBreak down"));
    }
}
