//! Static site strings.

use critter_core::lang::Lang;

pub(super) fn lookup(key: &str, lang: Lang) -> Option<&'static str> {
    let (en, zh) = match key {
        // --- Chrome ---
        "site_name" => ("A Curious Critter", "好奇小兽"),
        "nav_essays" => ("Essays", "文章"),
        "nav_quotes" => ("Quotes", "语录"),
        // Shows the language a click switches to.
        "lang_toggle" => ("中文", "EN"),

        // --- Home ---
        "hero_title" => ("A Curious Critter", "好奇小兽"),
        "hero_bio" => (
            "I used to do things. Now I do other things.",
            "从前做些事情。如今做些别的。",
        ),
        "home_essays_desc" => (
            "— Thoughts, in several languages.",
            "— 用几种语言写下的思考。",
        ),
        "home_quotes_desc" => (
            "— Words worth keeping, and some reflections.",
            "— 值得留存的话语，以及一些思索。",
        ),

        // --- Essays & quotes ---
        "essays_title" => ("Essays", "文章"),
        "quotes_title" => ("Quotes & Reflections", "语录与思索"),
        "filter_all" => ("All", "全部"),
        "reflection_label" => ("Reflection", "思索"),
        "back_essays" => ("← Essays", "← 文章"),
        _ => return None,
    };
    Some(match lang {
        Lang::En => en,
        Lang::Zh => zh,
    })
}
