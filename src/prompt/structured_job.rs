//! Instruction template for job-posting extraction

const TEMPLATE: &str = r#"
You are a JSON-extraction engine specializing in job posting analysis. Convert the following raw job posting text into exactly the JSON schema below:
— Do not add any extra fields or prose.
— Use "YYYY-MM-DD" for all dates.
— Ensure any URLs (website, applyLink) conform to URI format.
— Do not change the structure or key names; output only valid JSON matching the schema.
- Do not format the response in Markdown or any other format. Just output raw JSON.

CRITICAL REQUIREMENTS FOR KEYWORD EXTRACTION:
- You MUST extract at least 5 relevant keywords for the "extractedKeywords" field.
- Keywords should include: technical skills, software tools, programming languages, methodologies, industry terms, and job-specific terminology mentioned in the posting.
- If explicit keywords are not clearly stated, infer relevant keywords from the job responsibilities, qualifications, and requirements.
- Keywords MUST be relevant to the job position and industry.
- NEVER return an empty keywords list. If unsure, include general terms related to the job title and industry.

Schema:
```json
{schema}
```

Job Posting:
{posting}

Note: Please output only a valid JSON matching the EXACT schema with no surrounding commentary.
"#;

/// Build the instruction prompt for converting a raw job posting into JSON
/// matching `schema`. Pure substitution, no validation of either input.
pub fn structured_job_prompt(schema: &str, posting: &str) -> String {
    TEMPLATE
        .replace("{schema}", schema)
        .replace("{posting}", posting)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_is_deterministic() {
        let first = structured_job_prompt("{...}", "Sample text");
        let second = structured_job_prompt("{...}", "Sample text");
        assert_eq!(first, second);
    }

    #[test]
    fn test_prompt_substitutes_both_inputs() {
        let prompt = structured_job_prompt(r#"{"title": "string"}"#, "Senior Rust Engineer");
        assert!(prompt.contains(r#"{"title": "string"}"#));
        assert!(prompt.contains("Senior Rust Engineer"));
        assert!(!prompt.contains("{schema}"));
        assert!(!prompt.contains("{posting}"));
    }

    #[test]
    fn test_prompt_states_keyword_requirement() {
        let prompt = structured_job_prompt("{...}", "Sample text");
        assert!(prompt.contains("at least 5"));
        assert!(prompt.contains("extractedKeywords"));
        assert!(prompt.contains("NEVER return an empty keywords list"));
    }
}
