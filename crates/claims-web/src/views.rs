//! Server-side HTML views.
//!
//! Every view is a pure function from its payload to a complete HTML
//! document. All user-supplied text passes through [`escape`].

use axum::http::StatusCode;
use claims_core::{
  claim::{Claim, ClaimStatus},
  range::DateRange,
};

const STYLE: &str = "
body { font-family: sans-serif; margin: 2rem auto; max-width: 64rem; }
table { border-collapse: collapse; width: 100%; }
th, td { border: 1px solid #ccc; padding: .4rem .6rem; text-align: left; vertical-align: top; }
form.inline { display: inline; }
nav, .filters { margin-bottom: 1rem; }
label { display: block; margin: .5rem 0 .2rem; }
textarea { width: 100%; min-height: 6rem; }
.status-new { color: #1f6feb; }
.status-in-progress { color: #9a6700; }
.status-completed { color: #1a7f37; }
.status-cancelled { color: #6e7781; }
";

// ─── Escaping ─────────────────────────────────────────────────────────────────

/// Escape text for use in element content and quoted attribute values.
pub fn escape(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for c in s.chars() {
    match c {
      '&'  => out.push_str("&amp;"),
      '<'  => out.push_str("&lt;"),
      '>'  => out.push_str("&gt;"),
      '"'  => out.push_str("&quot;"),
      '\'' => out.push_str("&#39;"),
      _    => out.push(c),
    }
  }
  out
}

fn status_class(status: ClaimStatus) -> &'static str {
  match status {
    ClaimStatus::New        => "status-new",
    ClaimStatus::InProgress => "status-in-progress",
    ClaimStatus::Completed  => "status-completed",
    ClaimStatus::Cancelled  => "status-cancelled",
  }
}

fn page(title: &str, body: &str) -> String {
  format!(
    "<!DOCTYPE html>\n\
     <html lang=\"en\">\n\
     <head>\n\
     <meta charset=\"utf-8\">\n\
     <title>{title}</title>\n\
     <style>{STYLE}</style>\n\
     </head>\n\
     <body>\n{body}</body>\n\
     </html>\n",
    title = escape(title),
  )
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// The claim list, with the date filter and bulk actions.
///
/// `range` is echoed back into the filter inputs when the list is filtered.
pub fn index(claims: &[Claim], range: Option<&DateRange>) -> String {
  let start = range.map(|r| r.start.to_string()).unwrap_or_default();
  let end   = range.map(|r| r.end.to_string()).unwrap_or_default();

  let mut body = String::new();
  body.push_str("<h1>Claims</h1>\n");
  body.push_str("<nav><a href=\"/create\">New claim</a></nav>\n");

  body.push_str(&format!(
    "<form class=\"filters\" method=\"post\" action=\"/date\">\n\
     From <input type=\"date\" name=\"start\" value=\"{start}\">\n\
     to <input type=\"date\" name=\"end\" value=\"{end}\">\n\
     <button type=\"submit\">Filter</button>\n\
     <a href=\"/\">Reset</a>\n\
     </form>\n",
    start = escape(&start),
    end = escape(&end),
  ));

  body.push_str(
    "<form method=\"post\" action=\"/cancel\">\n\
     <button type=\"submit\">Cancel all in progress</button>\n\
     </form>\n",
  );

  if claims.is_empty() {
    let msg = if range.is_some() { "No claims in this period." } else { "No claims yet." };
    body.push_str(&format!("<p>{msg}</p>\n"));
    return page("Claims", &body);
  }

  body.push_str(
    "<table>\n<thead><tr>\
     <th>Date</th><th>Subject</th><th>Text</th><th>Status</th><th>Comment</th><th></th>\
     </tr></thead>\n<tbody>\n",
  );
  for claim in claims {
    body.push_str(&claim_row(claim));
  }
  body.push_str("</tbody>\n</table>\n");

  page("Claims", &body)
}

fn claim_row(claim: &Claim) -> String {
  format!(
    "<tr id=\"claim-{id}\">\
     <td>{date}</td>\
     <td>{subject}</td>\
     <td>{text}</td>\
     <td class=\"{class}\">{status}</td>\
     <td>{comment}</td>\
     <td>\
     <a href=\"/edit/{id}\">Change status</a> \
     <form class=\"inline\" method=\"post\" action=\"/delete/{id}\">\
     <button type=\"submit\">Delete</button>\
     </form>\
     </td>\
     </tr>\n",
    id = claim.id,
    date = claim.date,
    subject = escape(&claim.subject),
    text = escape(&claim.text),
    class = status_class(claim.status),
    status = escape(claim.status.as_str()),
    comment = escape(claim.comment.as_deref().unwrap_or_default()),
  )
}

// ─── Create ───────────────────────────────────────────────────────────────────

pub fn create_form() -> String {
  let body = "<h1>New claim</h1>\n\
              <form method=\"post\" action=\"/create\">\n\
              <label for=\"subject\">Subject</label>\n\
              <input id=\"subject\" name=\"subject\" required>\n\
              <label for=\"text\">Text</label>\n\
              <textarea id=\"text\" name=\"text\" required></textarea>\n\
              <button type=\"submit\">Submit</button>\n\
              <a href=\"/\">Back</a>\n\
              </form>\n";
  page("New claim", body)
}

// ─── Edit / comment ───────────────────────────────────────────────────────────

fn claim_summary(claim: &Claim) -> String {
  format!(
    "<p><strong>{subject}</strong> ({date})</p>\n<p>{text}</p>\n",
    subject = escape(&claim.subject),
    date = claim.date,
    text = escape(&claim.text),
  )
}

/// Status selector for one claim, with the current status preselected.
pub fn edit(claim: &Claim) -> String {
  let options: String = ClaimStatus::ALL
    .into_iter()
    .map(|status| {
      let selected = if status == claim.status { " selected" } else { "" };
      format!(
        "<option value=\"{value}\"{selected}>{value}</option>\n",
        value = escape(status.as_str()),
      )
    })
    .collect();

  let body = format!(
    "<h1>Change status</h1>\n\
     {summary}\
     <form method=\"post\" action=\"/edit\">\n\
     <input type=\"hidden\" name=\"id\" value=\"{id}\">\n\
     <label for=\"status\">Status</label>\n\
     <select id=\"status\" name=\"status\">\n{options}</select>\n\
     <button type=\"submit\">Save</button>\n\
     <a href=\"/\">Back</a>\n\
     </form>\n",
    summary = claim_summary(claim),
    id = claim.id,
  );
  page("Change status", &body)
}

/// Resolution comment form for one claim.
pub fn comment(claim: &Claim) -> String {
  let body = format!(
    "<h1>Comment</h1>\n\
     {summary}\
     <p>Status: <span class=\"{class}\">{status}</span></p>\n\
     <form method=\"post\" action=\"/comment\">\n\
     <input type=\"hidden\" name=\"id\" value=\"{id}\">\n\
     <label for=\"comment\">Comment</label>\n\
     <textarea id=\"comment\" name=\"comment\">{comment}</textarea>\n\
     <button type=\"submit\">Save</button>\n\
     <a href=\"/\">Skip</a>\n\
     </form>\n",
    summary = claim_summary(claim),
    class = status_class(claim.status),
    status = escape(claim.status.as_str()),
    id = claim.id,
    comment = escape(claim.comment.as_deref().unwrap_or_default()),
  );
  page("Comment", &body)
}

// ─── Errors ───────────────────────────────────────────────────────────────────

pub fn error_page(status: StatusCode, message: &str) -> String {
  let reason = status.canonical_reason().unwrap_or("Error");
  let body = format!(
    "<h1>{code} {reason}</h1>\n<p>{message}</p>\n<p><a href=\"/\">Back to claims</a></p>\n",
    code = status.as_u16(),
    reason = escape(reason),
    message = escape(message),
  );
  page(reason, &body)
}

#[cfg(test)]
mod tests {
  use chrono::{NaiveDate, Utc};

  use super::*;

  fn claim(status: ClaimStatus) -> Claim {
    let now = Utc::now();
    Claim {
      id:         3,
      date:       NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
      subject:    "Printer <jammed>".into(),
      text:       "Tom & Jerry's \"office\"".into(),
      status,
      comment:    None,
      created_at: now,
      updated_at: now,
    }
  }

  #[test]
  fn escape_covers_markup_characters() {
    assert_eq!(
      escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
      "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;",
    );
  }

  #[test]
  fn index_escapes_user_text() {
    let html = index(&[claim(ClaimStatus::New)], None);
    assert!(html.contains("Printer &lt;jammed&gt;"));
    assert!(html.contains("Tom &amp; Jerry&#39;s &quot;office&quot;"));
    assert!(!html.contains("<jammed>"));
  }

  #[test]
  fn index_echoes_filter_bounds() {
    let day   = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
    let range = DateRange::single_day(day);
    let html  = index(&[], Some(&range));
    assert!(html.contains("name=\"start\" value=\"2024-01-05\""));
    assert!(html.contains("name=\"end\" value=\"2024-01-05\""));
    assert!(html.contains("No claims in this period."));
  }

  #[test]
  fn edit_preselects_current_status() {
    let html = edit(&claim(ClaimStatus::InProgress));
    assert!(html.contains("<option value=\"In Progress\" selected>"));
    assert!(html.contains("<option value=\"New\">"));
    assert!(html.contains("name=\"id\" value=\"3\""));
  }

  #[test]
  fn comment_prefills_existing_comment() {
    let mut c = claim(ClaimStatus::Completed);
    c.comment = Some("fixed <fuser>".into());
    let html = comment(&c);
    assert!(html.contains(">fixed &lt;fuser&gt;</textarea>"));
  }

  #[test]
  fn error_page_shows_code_and_reason() {
    let html = error_page(StatusCode::NOT_FOUND, "claim 9 not found");
    assert!(html.contains("404 Not Found"));
    assert!(html.contains("claim 9 not found"));
  }
}
