// Prompt templates for the three generation calls.
// Placeholders: {resume_text}, {job_description_text}. User text is embedded verbatim.

/// Resume-vs-job analysis prompt.
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"Analyze the following resume against the provided job description. Act as an expert career coach and ATS specialist.
Provide a detailed analysis in JSON format.

**Resume:**
{resume_text}

**Job Description:**
{job_description_text}"#;

/// Cover letter prompt.
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"Based on the following resume and job description, write a professional, compelling, and concise cover letter.
The cover letter should highlight the candidate's most relevant skills and experiences that match the job requirements.
The tone should be professional yet enthusiastic. Address it to the "Hiring Manager".

**Resume:**
{resume_text}

**Job Description:**
{job_description_text}"#;

/// Interview question prompt. Resume only.
pub const QUESTIONS_PROMPT_TEMPLATE: &str = r#"Based on the provided resume, generate 5 insightful and challenging interview questions.
The questions should probe the candidate's experience, skills, and accomplishments mentioned in the resume.
Include at least one behavioral question and one technical or role-specific question.

**Resume:**
{resume_text}"#;

pub fn build_analysis_prompt(resume_text: &str, job_description_text: &str) -> String {
    fill(ANALYSIS_PROMPT_TEMPLATE, resume_text, job_description_text)
}

pub fn build_cover_letter_prompt(resume_text: &str, job_description_text: &str) -> String {
    fill(COVER_LETTER_PROMPT_TEMPLATE, resume_text, job_description_text)
}

pub fn build_questions_prompt(resume_text: &str) -> String {
    QUESTIONS_PROMPT_TEMPLATE.replace("{resume_text}", resume_text)
}

// Job text is substituted first so a resume containing the literal
// "{job_description_text}" is not expanded.
fn fill(template: &str, resume_text: &str, job_description_text: &str) -> String {
    template
        .replace("{job_description_text}", job_description_text)
        .replace("{resume_text}", resume_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_prompt_embeds_both_texts_verbatim() {
        let prompt = build_analysis_prompt("  Rust dev\n- shipped X  ", "Backend role");
        assert!(prompt.contains("  Rust dev\n- shipped X  "));
        assert!(prompt.contains("Backend role"));
        assert!(prompt.contains("expert career coach and ATS specialist"));
        assert!(!prompt.contains("{resume_text}"));
        assert!(!prompt.contains("{job_description_text}"));
    }

    #[test]
    fn test_cover_letter_prompt_addresses_hiring_manager() {
        let prompt = build_cover_letter_prompt("resume", "job");
        assert!(prompt.contains("\"Hiring Manager\""));
        assert!(prompt.contains("professional yet enthusiastic"));
    }

    #[test]
    fn test_questions_prompt_uses_resume_only() {
        let prompt = build_questions_prompt("My resume");
        assert!(prompt.contains("My resume"));
        assert!(prompt.contains("generate 5"));
        assert!(prompt.contains("behavioral"));
        assert!(!prompt.contains("Job Description"));
    }

    #[test]
    fn test_placeholder_text_in_resume_not_expanded() {
        let prompt = build_analysis_prompt("literal {job_description_text}", "JOB");
        assert!(prompt.contains("literal {job_description_text}"));
    }
}
