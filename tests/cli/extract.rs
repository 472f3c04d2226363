use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::CliTest;

#[test]
fn test_one_catalog_per_language_with_identical_content() -> Result<()> {
    let test = CliTest::with_file(
        "app/index.html",
        r#"
  <h1>{{ 'TITLE' | translate }}</h1>
  <span translate="GREETING"></span>
  "#,
    )?;

    let output = test.extract_command().arg("--lang").arg("fr_FR,en_CA").output()?;
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let fr = test.read_file("fr_FR.json")?;
    let en = test.read_file("en_CA.json")?;
    assert_eq!(fr, en);
    assert_eq!(
        fr,
        "{\n    \"GREETING\": \"\",\n    \"TITLE\": \"\"\n}\n"
    );

    Ok(())
}

#[test]
fn test_batch_and_plural_extraction() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("app/app.js", r#"$translate(['A', 'B', 'C']).then(done);"#)?;
    test.write_file(
        "app/list.html",
        r#"<span translate="ITEM_COUNT" angular-plural-extract="['one item','many items']"></span>"#,
    )?;

    let output = test.extract_command().arg("--lang").arg("en").output()?;
    assert!(output.status.success());

    let catalog = test.read_file("en.json")?;
    assert_eq!(
        catalog,
        "{\n    \"A\": \"\",\n    \"B\": \"\",\n    \"C\": \"\",\n    \"ITEM_COUNT\": \"{NB, plural, one{one item} other{many items}}\"\n}\n"
    );

    Ok(())
}

#[test]
fn test_namespace_and_null_empty() -> Result<()> {
    let test = CliTest::with_file(
        "app/view.html",
        r#"
  <a translate="NS1.NS2.VAL1"></a>
  <a translate="NS1.NS2.VAL2"></a>
  "#,
    )?;

    let output = test
        .extract_command()
        .arg("--lang")
        .arg("en")
        .arg("--namespace")
        .arg("--null-empty")
        .output()?;
    assert!(output.status.success());

    let catalog = test.read_file("en.json")?;
    assert_eq!(
        catalog,
        "{\n    \"NS1\": {\n        \"NS2\": {\n            \"VAL1\": \"NS1.NS2.VAL1\",\n            \"VAL2\": \"NS1.NS2.VAL2\"\n        }\n    }\n}\n"
    );

    Ok(())
}

#[test]
fn test_default_lang_restricts_the_fill() -> Result<()> {
    let test = CliTest::with_file("app/view.html", r#"<a translate="NS.VAL"></a>"#)?;

    let output = test
        .extract_command()
        .arg("--lang")
        .arg("fr_FR,en_CA")
        .arg("--namespace")
        .arg("--null-empty")
        .arg("--default-lang")
        .arg("fr_FR")
        .output()?;
    assert!(output.status.success());

    let fr = test.read_file("fr_FR.json")?;
    let en = test.read_file("en_CA.json")?;
    assert!(fr.contains("\"VAL\": \"NS.VAL\""));
    assert!(en.contains("\"VAL\": \"\""));

    Ok(())
}

#[test]
fn test_output_is_deterministic_across_runs() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("app/one.html", r#"<a translate="ZEBRA"></a> <a translate="alpha"></a>"#)?;
    test.write_file("app/two.js", r#"$translate.instant('Middle');"#)?;

    let first_run = test.extract_command().arg("--lang").arg("en").output()?;
    assert!(first_run.status.success());
    let first = test.read_file("en.json")?;

    let second_run = test.extract_command().arg("--lang").arg("en").output()?;
    assert!(second_run.status.success());
    let second = test.read_file("en.json")?;

    assert_eq!(first, second);
    // Case-insensitive ordering at work.
    assert_eq!(
        first,
        "{\n    \"alpha\": \"\",\n    \"Middle\": \"\",\n    \"ZEBRA\": \"\"\n}\n"
    );

    Ok(())
}

#[test]
fn test_missing_lang_fails_fast_with_no_artifacts() -> Result<()> {
    let test = CliTest::with_file("app/index.html", r#"<a translate="KEY"></a>"#)?;

    let output = test.extract_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("lang"));
    assert!(!test.root().join("en.json").exists());

    Ok(())
}

#[test]
fn test_no_source_files_emits_nothing() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.extract_command().arg("--lang").arg("en").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(!test.root().join("en.json").exists());

    Ok(())
}

#[test]
fn test_empty_files_are_forwarded_without_extraction() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("app/empty.html", "")?;
    test.write_file("app/real.html", r#"<a translate="KEY"></a>"#)?;

    let output = test.extract_command().arg("--lang").arg("en").output()?;
    assert!(output.status.success());

    let catalog = test.read_file("en.json")?;
    assert_eq!(catalog, "{\n    \"KEY\": \"\"\n}\n");

    Ok(())
}

#[test]
fn test_config_file_drives_the_run() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".gleanrc.json",
        r#"{
         "lang": ["nl_NL"],
         "destination": "i18n",
         "prefix": "project_",
         "includes": ["app"]
     }"#,
    )?;
    test.write_file("app/index.html", r#"<a translate="FROM.APP"></a>"#)?;
    test.write_file("ignored/other.html", r#"<a translate="FROM.OTHER"></a>"#)?;

    let output = test.extract_command().output()?;
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let catalog = test.read_file("i18n/project_nl_NL.json")?;
    assert!(catalog.contains("FROM.APP"));
    assert!(!catalog.contains("FROM.OTHER"));

    Ok(())
}

#[test]
fn test_custom_interpolation_delimiters() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".gleanrc.json",
        r#"{
         "lang": ["en"],
         "interpolation": { "startDelimiter": "[[", "endDelimiter": "]]" }
     }"#,
    )?;
    test.write_file("app/index.html", r#"<p>[[ 'BRACKET.KEY' | translate ]]</p>"#)?;

    let output = test.extract_command().output()?;
    assert!(output.status.success());

    let catalog = test.read_file("en.json")?;
    assert!(catalog.contains("BRACKET.KEY"));

    Ok(())
}

#[test]
fn test_custom_regex_from_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".gleanrc.json",
        r#"{
         "lang": ["en"],
         "customRegex": [
             { "name": "data_translate", "pattern": "data-translate=\"([^\"]*)\"" }
         ]
     }"#,
    )?;
    test.write_file("app/index.html", r#"<i data-translate="CUSTOM.KEY"></i>"#)?;

    let output = test.extract_command().output()?;
    assert!(output.status.success());

    let catalog = test.read_file("en.json")?;
    assert!(catalog.contains("CUSTOM.KEY"));

    Ok(())
}

#[test]
fn test_invalid_custom_regex_is_a_config_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".gleanrc.json",
        r#"{
         "lang": ["en"],
         "customRegex": [ { "name": "broken", "pattern": "([unclosed" } ]
     }"#,
    )?;
    test.write_file("app/index.html", r#"<a translate="KEY"></a>"#)?;

    let output = test.extract_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("customRegex"));
    assert!(!test.root().join("en.json").exists());

    Ok(())
}

#[test]
fn test_namespace_collision_warns_but_succeeds() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("app/a.html", r#"<a translate="MENU"></a>"#)?;
    test.write_file("app/b.html", r#"<a translate="MENU.OPEN"></a>"#)?;

    let output = test
        .extract_command()
        .arg("--lang")
        .arg("en")
        .arg("--namespace")
        .output()?;

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("warning:"));

    let catalog = test.read_file("en.json")?;
    assert_eq!(catalog, "{\n    \"MENU\": {\n        \"OPEN\": \"\"\n    }\n}\n");

    Ok(())
}
