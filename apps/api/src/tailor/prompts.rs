use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;

/// Builds the tailoring prompt. Both inputs are embedded verbatim: no escaping,
/// no placeholder substitution inside user text.
pub fn build_prompt(resume_text: &str, job_description: &str) -> String {
    format!(
        r#"You are an expert career coach. Compare the resume with the job description below, then return a JSON object with exactly these keys.

RESUME:
{resume_text}

JOB DESCRIPTION:
{job_description}

Keys to return:
- "resume_bullets": array of 5-7 resume bullet points rewritten to match the job requirements
- "cover_letter": string of under 200 words highlighting the strongest matches
- "skills": array of the top 5 skills or keywords from the job description to emphasize
- "match_score": integer from 0 to 100 rating how well the resume matches the job

{JSON_ONLY_INSTRUCTION}"#
    )
}
