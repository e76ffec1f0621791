//! Oracle prompts for the discovery pipeline.
//!
//! Prompt bodies are constants with `{placeholder}` slots; the formatting
//! helpers substitute them. The winner prompts are a matched pair: the
//! extraction prompt maximizes recall, the verification prompt re-reads the
//! same text for precision.

/// Prompt for planning search queries.
pub const PLAN_QUERIES_PROMPT: &str = r#"Generate a JSON list of {count} diverse search queries to find web pages listing past winners of the "{award_name}".
Focus on queries for official announcements and university press releases.
Respond ONLY with a JSON object with a single key "queries".

Example format:
{
    "queries": ["query 1", "query 2", "query 3"]
}"#;

/// Prompt for judging whether a page announces or lists winners.
pub const CLASSIFY_PAGE_PROMPT: &str = r#"You are a web content analyst. Your task is to determine if the given webpage is a primary source for a list or announcement of award winners.
Analyze BOTH the URL and the beginning of the page text to make your decision.

**CRITICAL EVIDENCE TO CONSIDER:**
- **URL ANALYSIS:** Does the URL contain keywords like "winners", "scholars", "directory", "bios", "announcement", "meet-the-class"? A URL like ".../rhodes-scholar-bios" is VERY strong evidence.
- **TEXT ANALYSIS:** Does the text contain headings like "Meet the Scholars", "Class of 2024", or a clear list of names with universities/majors?

The page IS a valid source even if it's a simple directory or list, not just a formal press release.
The page is NOT a valid source if it's a general news archive, a staff page, or a generic article that only mentions a single winner in passing.

EVIDENCE:
1. URL: {url}
2. Page Text (beginning):
---
{preview}
---

Is this a valid winner announcement or list? Respond with only "true" or "false"."#;

/// Prompt for the high-recall candidate extraction pass.
pub const EXTRACT_CANDIDATES_PROMPT: &str = r#"You are a highly precise data extraction system. From the provided text of a winner announcement, extract the full names of the winners.

**CRITICAL INSTRUCTIONS:**
1.  Only extract names that are clearly identified as scholars, winners, or recipients of the award - {award_name}. Look for phrases like "was selected as a scholar", "the winners are:", "joins the cohort of".
2.  For each name, extract their university, city, or field of study as the 'context_clue' if it is mentioned nearby.
3.  **DO NOT** extract names from navigation links, footers, author bylines, or general news headlines that are not part of the winner list.
4.  If the text contains multiple articles, only focus on the main article that lists the winners.

Respond ONLY with a JSON object with a single key "winners" containing a list of objects. If no valid winners are found, return an empty list.

Example format:
{
    "winners": [
        {"winner_name": "John Doe", "context_clue": "Harvard University"},
        {"winner_name": "Jane Smith", "context_clue": "Computer Science"}
    ]
}

Webpage Text:
---
{page_text}
---"#;

/// Prompt for the high-precision verification pass.
pub const VERIFY_WINNERS_PROMPT: &str = r#"You are a meticulous verification agent. Your task is to review a list of candidate names and confirm if they are EXPLICITLY identified as award winners in the provided text.

**CRITICAL INSTRUCTIONS:**
1. For each candidate name, carefully read the sentences around it in the text.
2. A name is CONFIRMED only if the text uses phrases like "was awarded", "is a new scholar", "the winners include [Name]", "[Name] was selected for", or similar direct confirmations.
3. A name is REJECTED if they are mentioned in a different role (e.g., a university president, a professor, an author) or if their status as a winner is ambiguous.

Here is the list of candidate names to verify:
[{candidates}]

Here is the full text to verify against:
---
{page_text}
---

Based on your verification, provide a final JSON object with a single key "confirmed_winners" containing a list of strings of only the names that are 100% confirmed as winners.
If you cannot confirm any of the names, return an empty list.

Example format:
{
    "confirmed_winners": ["John Doe", "Jane Smith"]
}"#;

/// Prompt for analyzing an award description into a weighted profile.
pub const PROFILE_PROMPT: &str = r#"You are an expert analyst specializing in award intelligence, pattern recognition, and weighted attribute extraction.

Your mission is to extract explicit and implicit priorities from an award description and calculate adaptive factor weights.

Perform all reasoning internally. Do not reveal your reasoning. Output only the final JSON.

STEP 1 - Read the description carefully. Identify explicit requirements and eligibility criteria.
STEP 2 - Infer implicit values and priorities from tone, mission language, and thematic emphasis.
STEP 3 - Extract keywords bucketed as high_intensity, medium_intensity, low_intensity, and negative. Identify tone and storytelling style.
STEP 4 - Compare this award to typical awards of a similar type and note unusually emphasized or de-emphasized traits.
STEP 5 - Generate weights for: academics, leadership, community_service, financial_need, innovation, research, resilience, extracurriculars, dei, creativity. Normalize all weights so they sum to 1.
STEP 6 - Assign ONE personality archetype: The Academic Purist, The Leadership Catalyst, The Community Builder, The Innovator, The Equity Champion, The Research Visionary, or The Resilience Storyteller.
STEP 7 - For each factor, output 2-5 bullet points citing textual evidence, inferred reasoning, and comparative observations.

Output ONLY this JSON:

{
  "explicit_requirements": [],
  "implicit_values": [],
  "keywords": {
    "high_intensity": [],
    "medium_intensity": [],
    "low_intensity": [],
    "negative": []
  },
  "tone": "",
  "story_style": "",
  "comparative_insights": [],
  "weights": {
     "academics": 0,
     "leadership": 0,
     "community_service": 0,
     "financial_need": 0,
     "innovation": 0,
     "research": 0,
     "resilience": 0,
     "extracurriculars": 0,
     "dei": 0,
     "creativity": 0
  },
  "explanations": {
     "academics": [],
     "leadership": [],
     "community_service": [],
     "financial_need": [],
     "innovation": [],
     "research": [],
     "resilience": [],
     "extracurriculars": [],
     "dei": [],
     "creativity": []
  },
  "personality": ""
}

Do not output anything outside the JSON.

AWARD DESCRIPTION:
{description}"#;

/// Format the query-planning prompt.
pub fn format_plan_queries(count: usize, award_name: &str) -> String {
    PLAN_QUERIES_PROMPT
        .replace("{count}", &count.to_string())
        .replace("{award_name}", award_name)
}

/// Format the page classification prompt.
pub fn format_classify_page(url: &str, preview: &str) -> String {
    CLASSIFY_PAGE_PROMPT
        .replace("{url}", url)
        .replace("{preview}", preview)
}

/// Format the candidate extraction prompt.
pub fn format_extract_candidates(award_name: &str, page_text: &str) -> String {
    EXTRACT_CANDIDATES_PROMPT
        .replace("{award_name}", award_name)
        .replace("{page_text}", page_text)
}

/// Format the verification prompt. Candidate names are quoted and
/// comma-separated.
pub fn format_verify_winners(candidates: &[String], page_text: &str) -> String {
    let listed = candidates
        .iter()
        .map(|name| format!("\"{}\"", name))
        .collect::<Vec<_>>()
        .join(", ");
    VERIFY_WINNERS_PROMPT
        .replace("{candidates}", &listed)
        .replace("{page_text}", page_text)
}

/// Format the award profile prompt.
pub fn format_profile(description: &str) -> String {
    PROFILE_PROMPT.replace("{description}", description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_queries_substitution() {
        let prompt = format_plan_queries(5, "Rhodes Scholarship");
        assert!(prompt.contains("5 diverse search queries"));
        assert!(prompt.contains("\"Rhodes Scholarship\""));
        assert!(!prompt.contains("{count}"));
        assert!(!prompt.contains("{award_name}"));
    }

    #[test]
    fn test_classify_page_substitution() {
        let prompt = format_classify_page("https://uni.edu/bios", "Meet the class");
        assert!(prompt.contains("1. URL: https://uni.edu/bios"));
        assert!(prompt.contains("Meet the class"));
    }

    #[test]
    fn test_verify_quotes_candidates() {
        let candidates = vec!["Jane Doe".to_string(), "John Smith".to_string()];
        let prompt = format_verify_winners(&candidates, "text");
        assert!(prompt.contains(r#"["Jane Doe", "John Smith"]"#));
    }

    #[test]
    fn test_extract_keeps_example_braces() {
        let prompt = format_extract_candidates("X Prize", "some page");
        assert!(prompt.contains(r#""winner_name": "John Doe""#));
        assert!(prompt.contains("X Prize"));
        assert!(prompt.contains("some page"));
    }
}
