use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::tempdir;

fn write_cfg(dir: &Path, body: &str) -> PathBuf {
    let p = dir.join("config.xml");
    fs::write(&p, format!("<config>{body}</config>")).unwrap();
    p
}

fn run(cfg: &Path, args: &[&str]) -> Output {
    let me = assert_cmd::cargo::cargo_bin!("tempname");
    Command::new(me)
        .env("TEMPNAME_CONFIG", cfg)
        .args(args)
        .output()
        .expect("spawn binary")
}

fn stdout_path(out: &Output) -> PathBuf {
    let s = String::from_utf8_lossy(&out.stdout);
    let lines: Vec<&str> = s.lines().collect();
    assert_eq!(lines.len(), 1, "expected exactly one stdout line, got: {s:?}");
    PathBuf::from(lines[0])
}

#[test]
fn creates_file_under_tmpdir_flag() {
    let td = tempdir().unwrap();
    let cfg = write_cfg(td.path(), "<log_level>quiet</log_level>");
    let work = td.path().join("work");
    fs::create_dir(&work).unwrap();

    let out = run(&cfg, &["-p", work.to_str().unwrap(), "tempfile_XXXXXX"]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let p = stdout_path(&out);
    assert!(p.is_file());
    assert_eq!(p.parent(), Some(work.as_path()));
    let name = p.file_name().unwrap().to_str().unwrap();
    assert!(name.starts_with("tempfile_"));
    assert_ne!(name, "tempfile_XXXXXX");
}

#[test]
fn directory_flag_creates_directory() {
    let td = tempdir().unwrap();
    let cfg = write_cfg(td.path(), "");
    let template = td.path().join("d_XXXXXX");

    let out = run(&cfg, &["-d", template.to_str().unwrap()]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert!(stdout_path(&out).is_dir());
}

#[test]
fn dry_run_creates_nothing() {
    let td = tempdir().unwrap();
    let cfg = write_cfg(td.path(), "");
    let template = td.path().join("u_XXXXXX");

    let out = run(&cfg, &["--dry-run", template.to_str().unwrap()]);
    assert!(out.status.success());
    let p = stdout_path(&out);
    assert!(!p.exists());
    assert!(p.file_name().unwrap().to_str().unwrap().starts_with("u_"));
}

#[test]
fn default_template_uses_config_tmpdir() {
    let td = tempdir().unwrap();
    let scratch = td.path().join("scratch");
    fs::create_dir(&scratch).unwrap();
    let cfg = write_cfg(td.path(), &format!("<tmpdir>{}</tmpdir>", scratch.display()));

    let out = run(&cfg, &[]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let p = stdout_path(&out);
    assert_eq!(p.parent(), Some(scratch.as_path()));
    assert!(p.file_name().unwrap().to_str().unwrap().starts_with("tmp."));
}

#[test]
fn invalid_template_fails_with_message() {
    let td = tempdir().unwrap();
    let cfg = write_cfg(td.path(), "");
    let out = run(&cfg, &["-d", "short_template_XXX"]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Invalid template"), "stderr: {stderr}");
    assert_eq!(stderr.matches("Invalid template").count(), 1, "reported once: {stderr}");
    assert!(!Path::new("short_template_XXX").exists());
}

#[test]
fn unknown_config_field_is_rejected() {
    let td = tempdir().unwrap();
    let cfg = write_cfg(td.path(), "<download_base>/x</download_base>");
    let out = run(&cfg, &["--dry-run", "x_XXXXXX"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("config"), "stderr: {stderr}");
}

#[test]
fn missing_explicit_config_is_an_error() {
    let td = tempdir().unwrap();
    let out = run(&td.path().join("nope.xml"), &["--dry-run", "x_XXXXXX"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("TEMPNAME_CONFIG"));
}

#[test]
fn zero_max_attempts_rejected_by_cli() {
    let td = tempdir().unwrap();
    let cfg = write_cfg(td.path(), "");
    let out = run(&cfg, &["--max-attempts", "0", "x_XXXXXX"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("invalid value") || stderr.contains("error:"), "stderr: {stderr}");
}

#[test]
fn print_config_reports_env_override() {
    let td = tempdir().unwrap();
    let cfg = write_cfg(td.path(), "");
    let out = run(&cfg, &["--print-config"]);
    assert!(out.status.success());
    assert_eq!(stdout_path(&out), cfg);
}

#[test]
fn unknown_log_level_flag_is_a_usage_error() {
    let td = tempdir().unwrap();
    let cfg = write_cfg(td.path(), "");
    let out = run(&cfg, &["--log-level", "loud", "-u", "x_XXXXXX"]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("loud"), "stderr: {stderr}");
}

#[test]
fn flags_override_config_file() {
    let td = tempdir().unwrap();
    let from_xml = td.path().join("from_xml");
    let from_flag = td.path().join("from_flag");
    fs::create_dir(&from_xml).unwrap();
    fs::create_dir(&from_flag).unwrap();
    let cfg = write_cfg(
        td.path(),
        &format!(
            "<tmpdir>{}</tmpdir><log_level>debug</log_level>",
            from_xml.display()
        ),
    );

    let out = run(&cfg, &["-p", from_flag.to_str().unwrap(), "--log-level", "quiet"]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(stdout_path(&out).parent(), Some(from_flag.as_path()));
    assert_eq!(fs::read_dir(&from_xml).unwrap().count(), 0);
    // debug from the file would have logged the startup event
    assert!(out.stderr.is_empty(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
}

#[cfg(target_os = "linux")]
#[test]
fn non_utf8_tmpdir_is_refused() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let td = tempdir().unwrap();
    let cfg = write_cfg(td.path(), "");
    let odd = td.path().join(OsStr::from_bytes(b"t\xffd"));
    fs::create_dir(&odd).unwrap();

    let me = assert_cmd::cargo::cargo_bin!("tempname");
    let out = Command::new(me)
        .env("TEMPNAME_CONFIG", &cfg)
        .env("TMPDIR", &odd)
        .output()
        .expect("spawn binary");
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("not valid UTF-8"), "stderr: {stderr}");
    assert_eq!(fs::read_dir(&odd).unwrap().count(), 0);
}
