use crate::{
    date::{format_long_date, to_local},
    event::Event,
};
use chrono::Datelike;
use chrono_tz::Tz;

/// Subject and bodies of an outgoing e-mail
#[derive(Debug, Clone, PartialEq)]
pub struct MailContent {
    pub subject: String,
    pub text: String,
    pub html: String,
}

impl MailContent {
    /// The "your event is today" reminder sent to the owner and every attendee
    pub fn event_reminder(event: &Event, tz: &Tz, now: i64) -> Self {
        let date = format_long_date(event.date_ts, tz);
        let time_info = event
            .time
            .as_ref()
            .map(|time| format!(" at {}", time))
            .unwrap_or_default();
        let location_info = event
            .location
            .as_ref()
            .map(|location| format!(" at {}", location))
            .unwrap_or_default();

        let text = format!(
            "Hello,\n\n\
             This is a friendly reminder that your event \"{}\" is today, {}{}{}.\n\n\
             We hope you have a wonderful time!\n\n\
             Best regards,\n\
             The Flower Station Team\n",
            event.title, date, time_info, location_info
        );

        let mut details = format!("<p><strong>Date:</strong> {}</p>\n", escape_html(&date));
        if let Some(time) = &event.time {
            details.push_str(&format!(
                "    <p><strong>Time:</strong> {}</p>\n",
                escape_html(time)
            ));
        }
        if let Some(location) = &event.location {
            details.push_str(&format!(
                "    <p><strong>Location:</strong> {}</p>\n",
                escape_html(location)
            ));
        }

        let html = format!(
            r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>Event Reminder</title>
  <style>
    body {{ font-family: Arial, sans-serif; line-height: 1.6; color: #333; max-width: 600px; margin: 0 auto; }}
    .container {{ padding: 20px; border: 1px solid #e5e7eb; border-radius: 8px; }}
    .header {{ text-align: center; padding-bottom: 20px; border-bottom: 1px solid #e5e7eb; margin-bottom: 20px; }}
    .logo {{ color: #16a34a; font-size: 24px; font-weight: bold; }}
    .event-name {{ font-size: 20px; font-weight: bold; color: #16a34a; margin: 15px 0; }}
    .footer {{ margin-top: 30px; padding-top: 20px; border-top: 1px solid #e5e7eb; text-align: center; font-size: 12px; color: #6b7280; }}
  </style>
</head>
<body>
  <div class="container">
    <div class="header">
      <div class="logo">Flower Station</div>
    </div>
    <p>Hello,</p>
    <p>This is a friendly reminder that your event is today!</p>
    <div class="event-name">{title}</div>
    {details}    <p>We hope you have a wonderful time!</p>
    <p>Best regards,<br>The Flower Station Team</p>
    <div class="footer">
      &copy; {year} Flower Station Event Manager. All rights reserved.
    </div>
  </div>
</body>
</html>
"#,
            title = escape_html(&event.title),
            details = details,
            year = to_local(now, tz).year(),
        );

        Self {
            subject: format!("Reminder: {} Today!", event.title),
            text,
            html,
        }
    }
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}
