//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `bosstask_core` linkage.
//! - Print the locale decisions for one language code (default `en`).

use bosstask_core::{locale_snapshot, localize, LocaleProfile, DEFAULT_LANGUAGE_CODE};

fn main() {
    let code = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_LANGUAGE_CODE.to_string());
    let profile = LocaleProfile::for_code(&code);
    let snapshot = locale_snapshot(&code);

    println!("bosstask_core ping={}", bosstask_core::ping());
    println!("bosstask_core version={}", bosstask_core::core_version());
    println!("language={} rtl={}", profile.code, profile.is_rtl());
    println!(
        "background={} accent={}",
        profile.background_asset,
        profile.accent.as_str()
    );
    println!("title={}", localize(&code, "app_title"));
    println!("today={}", snapshot.today);
    println!("time={}", snapshot.time);
    println!("amount={}", snapshot.sample_amount);
}
