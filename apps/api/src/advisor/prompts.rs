// All LLM prompt constants for the advisor services.
// JSON-only enforcement comes from llm_client::prompts::JSON_ONLY_SYSTEM;
// each template keeps its persona in the user prompt.

/// Resume evaluation prompt.
/// Replace `{resume_text}`, `{interests}`, `{career_goal}` before sending.
pub const EVALUATE_PROMPT_TEMPLATE: &str = r#"You are an expert career coach.

Resume:
{resume_text}

User Interests: {interests}
Career Goal: {career_goal}

Tasks:
1. Extract all skills mentioned anywhere in the resume, including:
   - Technical skills
   - Internships
   - Projects
   - Work experience
   - Achievements
2. List all the skills required for the selected interests and career goal.
3. Compute skill match percentage (skills they have / skills required).
4. Compute skill gap percentage.
5. List missing skills.
6. Provide 3-5 actionable recommendations (courses, learning paths, or projects) to cover missing skills.

Return a JSON object with EXACTLY these keys:
- extracted_skills
- required_skills
- skill_match_percentage
- skill_gap_percentage
- missing_skills
- recommendations"#;

/// Learning roadmap prompt. Replace `{missing_skills}` before sending.
pub const ROADMAP_PROMPT_TEMPLATE: &str = r#"You are a career coach.

The user is missing the following skills: {missing_skills}

Tasks:
1. Generate a structured learning roadmap to bridge these skill gaps.
2. Suggest relevant online courses from Udemy, Coursera, edX, Infosys Springboard.
3. Provide the order in which the skills should be learned.
4. Give an estimated timeline for each skill/course (e.g., 1-2 weeks, 2-3 weeks or in months).

Return ONLY a JSON array of objects with keys:
- skill
- recommended_course
- platform
- estimated_duration"#;

/// Project suggestion prompt. Replace `{career_goal}` before sending.
pub const PROJECTS_PROMPT_TEMPLATE: &str = r#"You are a career mentor.

The user's career goal is: {career_goal}

Tasks:
1. Suggest 2-4 practical and real time projects the user can do to gain relevant knowledge and experience.
2. Provide a short description for each project.
3. Suggest an estimated timeline to complete each project.

Return ONLY a JSON array of objects with keys:
- project_name
- description
- estimated_duration"#;

/// System prompt for the plain-text career-goal suggestion.
pub const GOAL_SUGGEST_SYSTEM: &str =
    "You are an expert career coach. Respond with plain text only, no markdown.";

/// Career-goal suggestion prompt. Replace `{resume_text}`, `{interests}`.
pub const GOAL_SUGGEST_PROMPT_TEMPLATE: &str = r#"Resume:
{resume_text}

User Interests: {interests}

Task:
Suggest one suitable career goal/job role for this user based on the resume and interests.
Return ONLY the job title as plain text."#;
