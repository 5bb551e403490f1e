//! Integration tests for loading, merging and persisting settings

mod common;

use common::TestData;
use serde_json::json;

use tdiary::settings::{Palette, SettingsService, Theme, ThemeStyle};

fn load(data: &TestData, theme: &mut Theme) -> SettingsService {
    SettingsService::load(data.paths.clone(), Some(theme))
}

#[test]
fn test_user_layer_overrides_default_file() {
    let data = TestData::new();
    data.write_default_settings(r#"{"theme_style": "Light", "primary_palette": "Blue", "font_size": 16}"#);
    data.write_user_settings(r#"{"primary_palette": "Teal", "font_size": 20}"#);

    let mut theme = Theme::default();
    let service = load(&data, &mut theme);

    assert_eq!(service.settings().theme_style, Some(ThemeStyle::Light));
    assert_eq!(service.settings().primary_palette, Some(Palette::Teal));
    assert_eq!(theme.palette, Palette::Teal);
    assert_eq!(theme.body_font_size(), Some(20));
}

#[test]
fn test_malformed_user_file_leaves_defaults() {
    let data = TestData::new();
    data.write_user_settings("{ this is not json");

    let mut theme = Theme::default();
    let service = load(&data, &mut theme);

    assert_eq!(service.settings().font_name.as_deref(), Some("Roboto"));
    assert_eq!(theme.style, ThemeStyle::Light);
    assert_eq!(theme.palette, Palette::Blue);
}

#[test]
fn test_mistyped_user_values_fall_back_to_default_file() {
    let data = TestData::new();
    data.write_default_settings(
        r#"{"theme_style": "Dark", "primary_palette": "Teal", "font_size": 20, "font_name": "Roboto"}"#,
    );
    data.write_user_settings(r#"{"font_size": "big", "primary_palette": "Ultraviolet"}"#);

    let mut theme = Theme::default();
    let service = load(&data, &mut theme);

    assert_eq!(service.settings().font_size, Some(20.0));
    assert_eq!(service.settings().primary_palette, Some(Palette::Teal));
    assert_eq!(theme.palette, Palette::Teal);
    assert_eq!(theme.body_font_size(), Some(20));
    assert_eq!(theme.style, ThemeStyle::Dark);
}

#[test]
fn test_whole_font_size_keeps_integer_form() {
    let data = TestData::new();
    data.write_default_settings(r#"{"font_size": 16}"#);
    let mut theme = Theme::default();
    let mut service = load(&data, &mut theme);

    service
        .apply_theme(Some(&mut theme), Some(ThemeStyle::Dark), None)
        .unwrap();

    let text = std::fs::read_to_string(&data.paths.user_settings).unwrap();
    assert!(text.contains("\"font_size\": 16\n"), "{text}");
}

#[test]
fn test_every_setter_writes_user_file() {
    let data = TestData::new();
    let mut theme = Theme::default();
    let mut service = load(&data, &mut theme);

    service
        .apply_theme(Some(&mut theme), Some(ThemeStyle::Dark), None)
        .unwrap();
    assert_eq!(data.read_user_settings()["theme_style"], json!("Dark"));

    service
        .apply_theme(Some(&mut theme), None, Some(Palette::DeepOrange))
        .unwrap();
    assert_eq!(data.read_user_settings()["primary_palette"], json!("DeepOrange"));

    service.apply_font(Some(&mut theme), Some("Fira Sans")).unwrap();
    assert_eq!(data.read_user_settings()["font_name"], json!("Fira_Sans"));

    service.apply_font_size(Some(&mut theme), Some(24.0)).unwrap();
    assert_eq!(data.read_user_settings()["font_size"], json!(24));
}

#[test]
fn test_persisted_file_holds_whole_map() {
    let data = TestData::new();
    data.write_user_settings(r#"{"diary_name": "Field notes"}"#);
    let mut theme = Theme::default();
    let mut service = load(&data, &mut theme);

    service
        .apply_theme(Some(&mut theme), Some(ThemeStyle::Dark), Some(Palette::Indigo))
        .unwrap();

    let text = std::fs::read_to_string(&data.paths.user_settings).unwrap();
    insta::assert_snapshot!(text, @r#"
    {
      "theme_style": "Dark",
      "primary_palette": "Indigo",
      "font_name": "Roboto",
      "font_size": 16,
      "diary_name": "Field notes"
    }
    "#);
}

#[test]
fn test_theme_fallbacks_when_keys_missing() {
    let data = TestData::new();
    data.write_default_settings("{}");
    let mut theme = Theme::default();
    theme.style = ThemeStyle::Dark;
    let mut service = load(&data, &mut theme);

    // Only the palette is given; style falls back to Light
    service
        .apply_theme(Some(&mut theme), None, Some(Palette::Amber))
        .unwrap();

    assert_eq!(theme.style, ThemeStyle::Light);
    assert_eq!(theme.palette, Palette::Amber);
}

#[test]
fn test_font_size_round_trips_through_scale() {
    let data = TestData::new();
    let mut theme = Theme::new(2.0);
    let mut service = load(&data, &mut theme);

    service.apply_font_size(Some(&mut theme), Some(24.0)).unwrap();
    assert_eq!(service.get_current_font_size(&theme), Some(24));
}

#[test]
fn test_reload_picks_up_external_changes() {
    let data = TestData::new();
    let mut theme = Theme::default();
    let mut service = load(&data, &mut theme);

    data.write_user_settings(r#"{"theme_style": "Dark", "font_name": "Inter"}"#);
    service.reload(Some(&mut theme));

    assert_eq!(theme.style, ThemeStyle::Dark);
    assert_eq!(theme.font_name("Body", tdiary::settings::SizeVariant::Large), Some("Inter"));
    assert_eq!(theme.font_name("Icon", tdiary::settings::SizeVariant::Large), Some("Roboto"));
}
