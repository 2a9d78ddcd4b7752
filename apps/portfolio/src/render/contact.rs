use crate::models::resume::{present, ResumeData};
use crate::models::sections::ContactVariant;
use crate::render::html::{escape, external_link_attrs};
use crate::render::{MissingData, SectionResult};
use crate::theme::ResolvedTheme;

type Presentation = fn(&ResumeData, &ResolvedTheme, i32) -> String;

const DEFAULT_PRESENTATION: Presentation = floating;

fn presentation(variant: ContactVariant) -> Presentation {
    match variant {
        ContactVariant::Floating => floating,
        ContactVariant::Simple
        | ContactVariant::Split
        | ContactVariant::Card
        | ContactVariant::Minimal
        | ContactVariant::Modern => DEFAULT_PRESENTATION,
    }
}

/// Renders the contact block. `year` goes into the copyright footer.
pub fn render(data: &ResumeData, theme: &ResolvedTheme, variant: ContactVariant, year: i32) -> SectionResult {
    let info = &data.personal_info;
    let has_channel = [&info.email, &info.phone, &info.linkedin, &info.github]
        .into_iter()
        .any(|v| present(v).is_some());
    if !has_channel {
        return Err(MissingData {
            section: "contact",
            reason: "no contact channel",
        });
    }
    Ok(presentation(variant)(data, theme, year))
}

struct Channel {
    icon: &'static str,
    label: &'static str,
    href: String,
    text: String,
}

fn channels(data: &ResumeData) -> Vec<Channel> {
    let info = &data.personal_info;
    let mut out = Vec::new();
    if let Some(email) = present(&info.email) {
        out.push(Channel {
            icon: "✉️",
            label: "Email",
            href: format!("mailto:{email}"),
            text: email.to_string(),
        });
    }
    if let Some(phone) = present(&info.phone) {
        out.push(Channel {
            icon: "📱",
            label: "Phone",
            href: format!("tel:{phone}"),
            text: phone.to_string(),
        });
    }
    if let Some(url) = present(&info.linkedin) {
        out.push(Channel {
            icon: "💼",
            label: "LinkedIn",
            href: url.to_string(),
            text: "Connect with me".to_string(),
        });
    }
    if let Some(url) = present(&info.github) {
        out.push(Channel {
            icon: "💻",
            label: "GitHub",
            href: url.to_string(),
            text: "View my projects".to_string(),
        });
    }
    out
}

fn floating(data: &ResumeData, theme: &ResolvedTheme, year: i32) -> String {
    let cards: String = channels(data)
        .iter()
        .map(|c| {
            format!(
                r#"<a href="{href}"{ext} class="contact-card group flex items-center gap-4 px-8 py-7 bg-slate-900 rounded-3xl shadow-lg border border-slate-800 hover:-translate-y-2 transition-all duration-300"><span class="text-3xl">{icon}</span><div class="min-w-0 flex-1"><p class="text-xs text-slate-500 mb-1">{label}</p><p class="font-medium text-slate-200 truncate">{text}</p></div></a>
"#,
                href = escape(&c.href),
                ext = external_link_attrs(&c.href),
                icon = c.icon,
                label = c.label,
                text = escape(&c.text),
            )
        })
        .collect();

    format!(
        r#"<section id="contact" class="py-16 sm:py-24 px-4 sm:px-6 bg-slate-950 relative overflow-hidden">
<div class="absolute inset-0 overflow-hidden">
<div class="absolute top-20 left-10 w-72 h-72 bg-gradient-to-br {gradient} rounded-full blur-3xl opacity-20 animate-pulse"></div>
<div class="absolute bottom-10 right-20 w-96 h-96 bg-gradient-to-br {gradient} rounded-full blur-3xl opacity-15 animate-pulse" style="animation-delay: 1s"></div>
</div>
<div class="max-w-4xl mx-auto relative z-10">
<div class="text-center mb-10 sm:mb-16">
<h2 class="text-3xl sm:text-4xl md:text-6xl font-bold text-white mb-4 sm:mb-6">Say Hello!</h2>
<p class="text-base sm:text-xl text-slate-400">I&#39;d love to hear from you</p>
</div>
<div class="grid grid-cols-1 sm:grid-cols-2 gap-6 max-w-3xl mx-auto">
{cards}</div>
<div class="text-center mt-10 sm:mt-16"><p class="text-slate-600 text-xs sm:text-sm">© {year} {name}. All rights reserved.</p></div>
</div>
</section>
"#,
        gradient = theme.gradient,
        name = escape(&data.personal_info.name),
    )
}
