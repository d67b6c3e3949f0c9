//! Instruction template for resume extraction

const TEMPLATE: &str = r#"
You are a JSON extraction engine specializing in resume analysis. Convert the following resume text into precisely the JSON schema specified below.
- Do not compose any extra fields or commentary.
- Do not make up values for any fields.
- Use "Present" if an end date is ongoing.
- Make sure dates are in YYYY-MM-DD.
- Do not format the response in Markdown or any other format. Just output raw JSON.

CRITICAL REQUIREMENTS FOR KEYWORD EXTRACTION:
- You MUST extract at least 5 relevant keywords for the "Extracted Keywords" field.
- Keywords should include: technical skills, software tools, programming languages, methodologies, industry certifications, and professional terminology found in the resume.
- Extract keywords from all sections: work experience, projects, skills, education, and achievements.
- If explicit keywords are not clearly listed, infer relevant keywords from job descriptions, project details, and responsibilities.
- Keywords MUST be relevant to the candidate's professional profile and industry.
- NEVER return an empty keywords list. If unsure, include general terms related to the candidate's job titles and industry experience.

Schema:
```json
{schema}
```

Resume:
```text
{resume}
```

NOTE: Please output only a valid JSON matching the EXACT schema.
"#;

/// Build the instruction prompt for converting resume text into JSON matching
/// `schema`. Pure substitution, no validation of either input.
pub fn structured_resume_prompt(schema: &str, resume: &str) -> String {
    TEMPLATE
        .replace("{schema}", schema)
        .replace("{resume}", resume)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_is_deterministic() {
        let first = structured_resume_prompt("{...}", "Sample text");
        let second = structured_resume_prompt("{...}", "Sample text");
        assert_eq!(first, second);
    }

    #[test]
    fn test_prompt_substitutes_both_inputs() {
        let prompt = structured_resume_prompt(r#"{"name": "string"}"#, "Jane Doe, 10 years Rust");
        assert!(prompt.contains(r#"{"name": "string"}"#));
        assert!(prompt.contains("Jane Doe, 10 years Rust"));
        assert!(!prompt.contains("{schema}"));
        assert!(!prompt.contains("{resume}"));
    }

    #[test]
    fn test_prompt_states_keyword_requirement() {
        let prompt = structured_resume_prompt("{...}", "Sample text");
        assert!(prompt.contains("at least 5"));
        assert!(prompt.contains("Extracted Keywords"));
        assert!(prompt.contains(r#"Use "Present" if an end date is ongoing."#));
    }
}
