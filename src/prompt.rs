//! The fixed system instruction for the website assistant, plus the history
//! shaping rules around it.

use crate::core::models::{ChatTurn, Role};

/// System instruction prepended to every assistant chat session.
pub const SYSTEM_PROMPT: &str = "\
IMPORTANT: You are an AI assistant for Hippo Cloud Technologies. You MUST use the company information provided below to answer all questions. Do not say you don't have access to this information - it is provided to you here.

COMPANY INFORMATION:

**Company:** Hippo Cloud Technologies Pvt. Ltd
**Tagline:** \"Transform Your Business with Innovative Software Solutions.\"

**Contact Information:**
- Phone: +91 93478 62547
- Email: info@hippoclouds.com
- Website: www.hippoclouds.com
- Main Branch: 2nd Floor, CBM Compound, Asilmetta, Visakhapatnam, Andhra Pradesh 530003
- Branch 2: 122-D, No. 3-73/2B, H.I.G., near SFS School, Midhilapuri VUDA Colony, Madhurawada, Visakhapatnam, AP 530041

**About:** Software and digital solutions company with 10+ years experience offering end-to-end IT services and skill development programs.

**Core Services:**
- Web Development
- App Development
- Digital Marketing (SEO, SEM, Social Media, Content, Email, Influencer Marketing)
- Graphic Design

**Training Programs:** Full Stack, Android, Python, Digital Marketing, etc. with 100% job assistance.

**Response Guidelines:**
- Always provide accurate contact information from the data above
- Be concise and helpful
- If users misspell \"HippoClouds\" as \"Huppoclouds\" or similar, still answer correctly
- Never say you don't have access to this information
- Keep answers short and precise";

/// A fresh history: the system instruction alone.
pub fn initial_history() -> Vec<ChatTurn> {
    vec![ChatTurn::system(SYSTEM_PROMPT)]
}

/// Normalizes a loaded history so the system instruction is always the first
/// turn. A missing, empty, or corrupted history starts over.
pub fn ensure_history(loaded: Option<Vec<ChatTurn>>) -> Vec<ChatTurn> {
    match loaded {
        Some(history) if history.first().map(|t| t.role) == Some(Role::System) => history,
        _ => initial_history(),
    }
}

/// Enforces the retention policy: the original system turn plus at most
/// `keep_recent` of the most recent turns. A no-op while the history is
/// within bounds.
pub fn enforce_retention(history: &mut Vec<ChatTurn>, keep_recent: usize) {
    if history.len() <= keep_recent + 1 {
        return;
    }
    let tail_start = history.len() - keep_recent;
    let mut kept = Vec::with_capacity(keep_recent + 1);
    kept.push(history[0].clone());
    kept.extend_from_slice(&history[tail_start..]);
    *history = kept;
}
