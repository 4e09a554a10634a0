use minijinja::{context, Environment, Value};
use taxi_shared::TenantConfig;

pub const FALLBACK_TITLE: &str = "Taksi Hizmetleri - Hızlı ve Güvenilir";
pub const FALLBACK_DESCRIPTION: &str = "Güvenilir taksi hizmeti için hemen arayın.";

/// 页面渲染器
///
/// Templates are compiled into the binary and parsed once at startup.
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template("base.html", include_str!("../templates/base.html"))?;
        env.add_template("page.html", include_str!("../templates/page.html"))?;
        env.add_template("notice.html", include_str!("../templates/notice.html"))?;
        env.add_template(
            "conversion_buttons.html",
            include_str!("../templates/conversion_buttons.html"),
        )?;

        Ok(Self { env })
    }

    /// Full landing page for a resolved tenant.
    pub fn render_tenant(&self, tenant: &TenantConfig) -> Result<String, minijinja::Error> {
        let ads_id = tenant.ads_id();
        let send_to = ads_id.map(|id| match tenant.conversion_label() {
            Some(label) => format!("{}/{}", id, label),
            None => id.to_string(),
        });

        self.env.get_template("page.html")?.render(context! {
            title => or_fallback(&tenant.title, FALLBACK_TITLE),
            description => or_fallback(&tenant.description, FALLBACK_DESCRIPTION),
            tenant => tenant,
            ads_id => ads_id,
            send_to => send_to,
            site_verification => tenant.site_verification(),
            whatsapp_link => attr_url(&tenant.whatsapp_link()),
            phone_link => attr_url(&tenant.phone_link()),
        })
    }

    /// Informational page shown when no tenant reached the renderer.
    pub fn render_notice(&self) -> Result<String, minijinja::Error> {
        self.env.get_template("notice.html")?.render(context! {
            title => FALLBACK_TITLE,
            description => FALLBACK_DESCRIPTION,
        })
    }
}

fn or_fallback<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}

// minijinja 的 HTML 转义也会把 `/` 变成 `&#x2f;`，链接会变得难以阅读。
// Only the characters that can end or break an attribute value are escaped here.
fn attr_url(url: &str) -> Value {
    let mut escaped = String::with_capacity(url.len());
    for c in url.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    Value::from_safe_string(escaped)
}
