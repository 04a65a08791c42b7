use crate::models::Submission;
use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("mail request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("mail API answered {status}: {body}")]
    Api { status: u16, body: String },
}

#[derive(Serialize)]
struct Address<'a> {
    email: &'a str,
}

#[derive(Serialize)]
struct Personalization<'a> {
    to: [Address<'a>; 1],
}

#[derive(Serialize)]
struct Content<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    value: &'a str,
}

#[derive(Serialize)]
struct MailRequest<'a> {
    personalizations: [Personalization<'a>; 1],
    from: Address<'a>,
    subject: &'a str,
    content: [Content<'a>; 1],
}

/// HTTP client for the transactional-mail API.
#[derive(Clone)]
pub struct Mailer {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    from: String,
}

impl Mailer {
    pub fn new(api_url: String, api_key: String, from: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .context("failed to build mail HTTP client")?;
        Ok(Self {
            client,
            api_url,
            api_key,
            from,
        })
    }

    pub async fn send_html(&self, to: &str, subject: &str, html: &str) -> Result<(), MailError> {
        let request = MailRequest {
            personalizations: [Personalization {
                to: [Address { email: to }],
            }],
            from: Address { email: &self.from },
            subject,
            content: [Content {
                kind: "text/html",
                value: html,
            }],
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MailError::Api {
                status: status.as_u16(),
                body,
            });
        }

        info!(to, subject, "digest mail accepted");
        Ok(())
    }
}

fn count_by(submissions: &[Submission], f: impl Fn(&Submission) -> bool) -> usize {
    submissions.iter().filter(|s| f(s)).count()
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Render the digest body: a summary block followed by one card per
/// submission, newest first.
#[must_use]
pub fn render_digest_html(submissions: &[Submission]) -> String {
    let date = Utc::now().format("%B %-d, %Y");
    let mut html = format!(
        "<html><head><style>\
         body{{font-family:Arial,sans-serif;line-height:1.6;color:#333}}\
         .header{{background-color:#8B4513;color:white;padding:20px;text-align:center}}\
         .submission{{border:1px solid #ddd;margin:20px 0;padding:15px;border-radius:5px}}\
         .field{{margin:10px 0}}\
         .label{{font-weight:bold;color:#8B4513}}\
         .difficulty-1{{border-left:4px solid #28a745}}\
         .difficulty-2{{border-left:4px solid #ffc107}}\
         .difficulty-3{{border-left:4px solid #dc3545}}\
         .summary{{background-color:#f8f9fa;padding:15px;margin:20px 0;border-radius:5px}}\
         </style></head><body>\
         <div class=\"header\"><h1>HistBench Submissions Report</h1><p>{date}</p></div>\
         <div class=\"summary\"><h2>Summary</h2>\
         <p><strong>{}</strong> new submissions received</p><ul>\
         <li>Level 1 (Basic): {}</li>\
         <li>Level 2 (Intermediate): {}</li>\
         <li>Level 3 (Advanced): {}</li></ul><ul>\
         <li>Exact Match: {}</li>\
         <li>Multiple Choice: {}</li></ul></div>",
        submissions.len(),
        count_by(submissions, |s| s.difficulty == "1"),
        count_by(submissions, |s| s.difficulty == "2"),
        count_by(submissions, |s| s.difficulty == "3"),
        count_by(submissions, |s| s.answer_type == "Exact Match"),
        count_by(submissions, |s| s.answer_type == "Multiple Choice"),
    );

    for (index, s) in submissions.iter().enumerate() {
        let submitted = s.submitted_at.format("%Y-%m-%d %H:%M UTC");
        html.push_str(&format!(
            "<div class=\"submission difficulty-{}\">\
             <h3>Submission {}</h3>\
             <div class=\"field\"><span class=\"label\">Difficulty:</span> Level {}</div>\
             <div class=\"field\"><span class=\"label\">Answer Type:</span> {}</div>\
             <div class=\"field\"><span class=\"label\">Question:</span><br>{}</div>\
             <div class=\"field\"><span class=\"label\">Required Data:</span><br>{}</div>\
             <div class=\"field\"><span class=\"label\">Answer:</span> {}</div>\
             <div class=\"field\"><span class=\"label\">Explanation:</span><br>{}</div>\
             <div class=\"field\"><span class=\"label\">Source Reference:</span><br>{}</div>\
             <div class=\"field\"><span class=\"label\">Thematic Direction:</span><br>{}</div>\
             <div class=\"field\"><span class=\"label\">Contributor:</span> {} ({})</div>\
             <div class=\"field\"><span class=\"label\">Submitted:</span> {submitted}</div>\
             </div>",
            escape_html(&s.difficulty),
            index + 1,
            escape_html(&s.difficulty),
            escape_html(&s.answer_type),
            escape_html(&s.question_text),
            escape_html(&s.required_data),
            escape_html(&s.answer),
            escape_html(&s.explanation),
            escape_html(&s.source_reference),
            escape_html(&s.thematic_direction),
            escape_html(&s.contributor_name),
            escape_html(&s.contributor_affiliation),
        ));
    }

    html.push_str("</body></html>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample(id: i64, difficulty: &str, answer_type: &str) -> Submission {
        Submission {
            id,
            difficulty: difficulty.to_string(),
            answer_type: answer_type.to_string(),
            question_text: "When was the stele erected?".to_string(),
            required_data: "Photograph of the dedication face.".to_string(),
            answer: "498 CE".to_string(),
            explanation: "Taihe year 22 corresponds to 498 CE.".to_string(),
            source_reference: "Collected Northern Wei Epigraphy, vol. 2.".to_string(),
            thematic_direction: "Epigraphy".to_string(),
            contributor_name: "A. Historian".to_string(),
            contributor_affiliation: "Fudan University".to_string(),
            status: "pending".to_string(),
            user_agent: None,
            submitted_at: Utc.with_ymd_and_hms(2025, 6, 1, 8, 30, 0).unwrap(),
        }
    }

    #[test]
    fn digest_summarizes_by_level_and_type() {
        let html = render_digest_html(&[
            sample(1, "1", "Exact Match"),
            sample(2, "2", "Exact Match"),
            sample(3, "2", "Multiple Choice"),
        ]);
        assert!(html.contains("<strong>3</strong> new submissions received"));
        assert!(html.contains("Level 1 (Basic): 1"));
        assert!(html.contains("Level 2 (Intermediate): 2"));
        assert!(html.contains("Level 3 (Advanced): 0"));
        assert!(html.contains("Exact Match: 2"));
        assert!(html.contains("Multiple Choice: 1"));
        assert!(html.contains("Submission 3"));
    }

    #[test]
    fn digest_escapes_markup_in_field_values() {
        let mut s = sample(1, "1", "Exact Match");
        s.answer = "<script>alert(1)</script>".to_string();
        let html = render_digest_html(&[s]);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn empty_digest_still_renders_a_report() {
        let html = render_digest_html(&[]);
        assert!(html.contains("<strong>0</strong> new submissions received"));
        assert!(html.ends_with("</body></html>"));
    }
}
