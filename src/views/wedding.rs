use super::{details, escape, map_section, present};
use crate::models::invite::Invite;

pub(super) fn render(invite: &Invite) -> String {
    let greeting = present(&invite.receiver_name)
        .map(|name| {
            format!(
                r#"<div class="greeting">
    <p>Respected {},</p>
    <p class="sub">We cordially invite you to grace the occasion</p>
  </div>"#,
                escape(name)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<div class="card">
  <div class="decor">ॐ<br>🕉️ ✨ 🕉️</div>
  <div class="divider">💍</div>
  {greeting}
  <h1>{title}</h1>
  <div class="couple">
    <div><div>👰</div><p class="bride">{bride}</p></div>
    <div>💑</div>
    <div><div>🤵</div><p class="groom">{groom}</p></div>
  </div>
  <div class="decor">🌸 ✨ 🌸</div>
  <div class="message">
    <span class="label">A Message from the Heart</span>
    <p>"{message}"</p>
  </div>
  {details}
  {map}
  <div class="decor">🪔 🌺 🪔</div>
  <p class="note">Your presence will make our special day even more memorable</p>
  <div class="decor">🙏</div>
</div>"#,
        title = escape(present(&invite.title).unwrap_or_default()),
        bride = escape(present(&invite.bride).unwrap_or_default()),
        groom = escape(present(&invite.groom).unwrap_or_default()),
        message = escape(present(&invite.message).unwrap_or_default()),
        details = details(invite, "🏛️"),
        map = map_section(invite, "🗺️ Find Your Way", "🧭 Open in Google Maps", 400),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::tests::invite;

    #[test]
    fn shows_the_couple() {
        let mut inv = invite("Wedding");
        inv.bride = Some("Asha".into());
        inv.groom = Some("Ravi".into());
        let html = render(&inv);
        assert!(html.contains(r#"<p class="bride">Asha</p>"#));
        assert!(html.contains(r#"<p class="groom">Ravi</p>"#));
    }

    #[test]
    fn formal_greeting_for_receiver() {
        let mut inv = invite("Wedding");
        inv.receiver_name = Some("Mr. Rao".into());
        assert!(render(&inv).contains("Respected Mr. Rao,"));
    }

    #[test]
    fn map_uses_taller_frame() {
        let mut inv = invite("Wedding");
        inv.map_link = Some("https://maps.app.goo.gl/abc".into());
        let html = render(&inv);
        assert!(html.contains(r#"src="https://www.google.com/maps/embed/abc" height="400""#));
        assert!(html.contains("Find Your Way"));
    }
}
