use console::{style, Term};
use tui_banner::{Align, Banner, ColorMode, Fill, Gradient, GradientDirection, Palette};

const BRAND: u8 = 74;      // steel blue
const BRAND_DIM: u8 = 24;  // deep blue
const DIM: u8 = 240;

const SEP_CHAR: char = '\u{2026}'; // …

const TAGLINE: &str = "Audit report analysis desk";

/// Print the start-up banner with the server the shell talks to.
pub fn show_splash(server: &str) {
    let term = Term::stdout();
    let version = env!("CARGO_PKG_VERSION");
    let git_hash = option_env!("GIT_HASH").unwrap_or("dev");

    let (_, term_cols) = term.size();
    let term_w = term_cols as usize;

    let center = |text_w: usize| -> String {
        if term_w > text_w + 4 {
            " ".repeat((term_w - text_w) / 2)
        } else {
            "  ".to_string()
        }
    };

    let palette = Palette::from_hex(&["#AFD7FF", "#5FAFD7", "#005F87"]);
    let gradient = Gradient::new(palette.colors().to_vec(), GradientDirection::Diagonal);

    let banner_text = match Banner::new("REPORTDESK") {
        Ok(b) => b
            .gradient(gradient)
            .fill(Fill::Keep)
            .align(Align::Center)
            .trim_vertical(true)
            .color_mode(ColorMode::TrueColor)
            .width(term_w)
            .render(),
        Err(_) => format!("{}{}\n", center(10), style("REPORTDESK").color256(BRAND).bold()),
    };

    println!();
    print!("{}", banner_text);

    let version_str = format!("v{} ({})", version, git_hash);
    println!("{}{}", center(version_str.len()), style(version_str).color256(DIM));

    let scene_w = term_w.clamp(40, 76);
    let pad = center(scene_w);
    let separator = style(SEP_CHAR.to_string().repeat(scene_w)).color256(BRAND_DIM);
    println!("{}{}", pad, separator);
    println!("{}{}", center(TAGLINE.len()), style(TAGLINE).white().bold());
    println!("{}{}", pad, separator);
    println!();

    let server_line = format!("Server: {}", server);
    println!("{}{}", center(server_line.len()), style(server_line).dim());
    println!();

    let guide: &[(&str, &str)] = &[
        ("/upload <file.pdf>", "Upload a report for analysis"),
        ("/list",              "Show previous reports"),
        ("/select <n>",        "Open report n from the list"),
        ("/export",            "Download the report on display"),
        ("/help",              "List all commands"),
    ];
    let p = center(56);
    println!("{}  {}", p, style("Quick Start:").white().bold());
    println!();
    for (cmd, desc) in guide {
        println!("{}    {:<22} {}", p, style(cmd).color256(BRAND), style(desc).dim());
    }
    println!();
}
