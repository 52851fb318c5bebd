use crate::config::save::save_settings;
use crate::config::types::{Camera, Config, Language};
use crate::menu::handlers::run_photo_organizer;
use anyhow::Result;
use console::{Term, style};
use dialoguer::Select;
use dialoguer::theme::ColorfulTheme;
use rust_i18n::t;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

pub fn show_main_menu(
    term: &Term,
    shutdown_signal: &Arc<AtomicBool>,
    config: &mut Config,
) -> Result<bool> {
    term.clear_screen()?;

    println!("{}", style(t!("main_menu.title")).cyan().bold());
    println!("{}", style(t!("common.esc_hint")).dim());

    let options = vec![
        t!("main_menu.opt_organize"),
        t!("main_menu.opt_settings"),
        t!("main_menu.exit"),
    ];

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(t!("main_menu.prompt"))
        .items(&options)
        .default(0)
        .interact_on_opt(term)?;

    match selection {
        Some(0) => {
            run_photo_organizer(term, shutdown_signal, config)?;
            Ok(true)
        }
        Some(1) => {
            show_settings_menu(term, config)?;
            Ok(true)
        }
        Some(2) | None => {
            term.clear_screen()?;
            println!("\n{}", style(t!("main_menu.goodbye")).green().bold());
            Ok(false)
        }
        _ => unreachable!(),
    }
}

/// 設定選單
fn show_settings_menu(term: &Term, config: &mut Config) -> Result<()> {
    loop {
        term.clear_screen()?;

        println!("{}", style(t!("settings.title")).cyan().bold());
        println!("{}", style(t!("common.esc_hint")).dim());

        let options = vec![
            t!("settings.opt_camera"),
            t!("settings.opt_dry_run"),
            t!("settings.opt_language"),
            t!("settings.back"),
        ];

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(t!("settings.prompt"))
            .items(&options)
            .default(0)
            .interact_on_opt(term)?;

        match selection {
            Some(0) => show_camera_menu(term, config)?,
            Some(1) => show_dry_run_menu(term, config)?,
            Some(2) => show_language_menu(term, config)?,
            Some(3) | None => break, // ESC or back
            _ => unreachable!(),
        }
    }

    Ok(())
}

/// 相機類型設定選單
fn show_camera_menu(term: &Term, config: &mut Config) -> Result<()> {
    term.clear_screen()?;

    println!("{}", style(t!("settings.camera_title")).cyan().bold());
    println!("{}", style(t!("common.esc_hint")).dim());

    // 顯示當前設定
    println!(
        "\n{} {}",
        style(t!("settings.camera_current")).dim(),
        config.settings.camera
    );
    println!();

    let items: Vec<String> = Camera::ALL.iter().map(ToString::to_string).collect();

    let default_index = Camera::ALL
        .iter()
        .position(|&c| c == config.settings.camera)
        .unwrap_or(0);

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(t!("settings.camera_prompt"))
        .items(&items)
        .default(default_index)
        .interact_on_opt(term)?;

    // ESC pressed - return without saving
    let Some(selection) = selection else {
        return Ok(());
    };

    let selected_camera = Camera::ALL[selection];

    if selected_camera != config.settings.camera {
        config.settings.camera = selected_camera;
        save_settings(&config.settings)?;
        println!(
            "\n{} {}",
            style(t!("settings.saved")).green(),
            selected_camera
        );
        std::thread::sleep(std::time::Duration::from_secs(1));
    }

    Ok(())
}

/// 安全模式（dry-run）設定選單
fn show_dry_run_menu(term: &Term, config: &mut Config) -> Result<()> {
    term.clear_screen()?;

    println!("{}", style(t!("settings.dry_run_title")).cyan().bold());
    println!("{}", style(t!("common.esc_hint")).dim());

    let current = if config.settings.dry_run {
        t!("common.enabled")
    } else {
        t!("common.disabled")
    };
    println!(
        "\n{} {}",
        style(t!("settings.dry_run_current")).dim(),
        current
    );
    println!();

    let modes = [true, false];
    let items: Vec<String> = vec![
        t!("settings.dry_run_on").to_string(),
        t!("settings.dry_run_off").to_string(),
    ];

    let default_index = usize::from(!config.settings.dry_run);

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(t!("settings.dry_run_prompt"))
        .items(&items)
        .default(default_index)
        .interact_on_opt(term)?;

    // ESC pressed - return without saving
    let Some(selection) = selection else {
        return Ok(());
    };

    let selected_mode = modes[selection];

    if selected_mode != config.settings.dry_run {
        config.settings.dry_run = selected_mode;
        save_settings(&config.settings)?;
        println!("\n{} {}", style(t!("settings.saved")).green(), items[selection]);
        std::thread::sleep(std::time::Duration::from_secs(1));
    }

    Ok(())
}

/// 語言設定選單
fn show_language_menu(term: &Term, config: &mut Config) -> Result<()> {
    term.clear_screen()?;

    println!("{}", style(t!("settings.language_title")).cyan().bold());
    println!("{}", style(t!("common.esc_hint")).dim());

    let languages = [Language::EnUs, Language::ZhCn];

    let items: Vec<String> = languages.iter().map(ToString::to_string).collect();

    let default_index = languages
        .iter()
        .position(|&l| l == config.settings.language)
        .unwrap_or(0);

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(t!("settings.language_prompt"))
        .items(&items)
        .default(default_index)
        .interact_on_opt(term)?;

    // ESC pressed - return without saving
    let Some(selection) = selection else {
        return Ok(());
    };

    let selected_lang = languages[selection];

    if selected_lang != config.settings.language {
        config.settings.language = selected_lang;
        rust_i18n::set_locale(selected_lang.as_str());
        save_settings(&config.settings)?;
        println!("\n{} {}", style(t!("settings.saved")).green(), selected_lang);
        std::thread::sleep(std::time::Duration::from_secs(1));
    }

    Ok(())
}
