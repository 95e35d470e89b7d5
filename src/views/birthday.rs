use super::{details, escape, map_section, present};
use crate::models::invite::Invite;

pub(super) fn render(invite: &Invite) -> String {
    let greeting = present(&invite.receiver_name)
        .map(|name| format!(r#"<p class="greeting">Dear {},</p>"#, escape(name)))
        .unwrap_or_default();

    format!(
        r#"<div class="card">
  <div class="decor">🎊 🎉 🎈</div>
  {greeting}
  <h1>You're Invited!</h1>
  <h2>{title}</h2>
  <div class="message"><p>{message}</p></div>
  {details}
  {map}
  <div class="decor">🎂 🎁 ✨</div>
  <p class="note">We can't wait to celebrate with you!</p>
</div>"#,
        title = escape(present(&invite.title).unwrap_or_default()),
        message = escape(present(&invite.message).unwrap_or_default()),
        details = details(invite, "📍"),
        map = map_section(invite, "📍 Location on Map", "🗺️ Open in Google Maps", 350),
    )
}
