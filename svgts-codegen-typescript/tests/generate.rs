//! End-to-end generation tests against real directories.

use std::{
    fs,
    path::{Path, PathBuf},
};

use svgts_codegen_typescript::Generator;
use svgts_core::Error;
use svgts_options::{ConversionOptions, Delimiter, RawOptions};
use svgts_source::{BoxError, SvgOptimizer};
use tempfile::TempDir;

struct Passthrough;

impl SvgOptimizer for Passthrough {
    fn optimize(&self, svg: &str) -> Result<String, BoxError> {
        Ok(svg.to_string())
    }
}

struct Failing;

impl SvgOptimizer for Failing {
    fn optimize(&self, _svg: &str) -> Result<String, BoxError> {
        Err("broken markup".into())
    }
}

const HOME_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24">
  <path d="M0 0 L24 24"/>
</svg>
"#;

fn icon_dir(root: &Path, name: &str, icons: &[(&str, &str)]) -> PathBuf {
    let dir = root.join(name);
    fs::create_dir(&dir).unwrap();
    for (file, content) in icons {
        fs::write(dir.join(file), content).unwrap();
    }
    dir
}

fn options<P: AsRef<Path>>(sources: &[P], out_dir: &Path) -> ConversionOptions {
    let raw = RawOptions {
        prefix: Some("ic".to_string()),
        delimiter: Some(Delimiter::Snake),
        type_name: Some("Icons".to_string()),
        interface_name: Some("Icon".to_string()),
        file_name: Some("icons".to_string()),
        output_directory: Some(out_dir.to_path_buf()),
        ..Default::default()
    };
    sources
        .iter()
        .fold(raw, |raw, dir| raw.src_file(dir.as_ref().display().to_string()))
        .resolve()
}

#[test]
fn test_single_icon_end_to_end() {
    let temp = TempDir::new().unwrap();
    let src = icon_dir(temp.path(), "assets", &[("home.svg", HOME_SVG)]);
    let out = temp.path().join("dist");
    let options = options(&[&src], &out);

    let result = Generator::new(&options).generate().unwrap();

    assert_eq!(result.icons, vec!["icHome"]);
    assert_eq!(result.files, vec![out.join("icons.ts")]);

    let code = fs::read_to_string(out.join("icons.ts")).unwrap();
    assert!(code.contains("export const icHome: Icon = {"));
    assert!(code.contains("name: 'home'"));
    assert!(code.contains("data: '<svg"));
    assert!(code.contains("export type Icons = 'home'"));
    assert!(code.contains("export interface Icon {"));
    assert!(code.contains("name: Icons"));
    assert!(code.contains("data: string"));
}

#[test]
fn test_default_optimizer_keeps_rendering_markup() {
    let temp = TempDir::new().unwrap();
    let src = icon_dir(
        temp.path(),
        "assets",
        &[(
            "badge.svg",
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24">
  <!-- exported by an editor -->
  <path fill="currentColor" d="M0 0 L24 24 L0 24 Z"/>
  <text x="0" y="12">A</text>
</svg>"#,
        )],
    );
    let out = temp.path().join("dist");
    let options = options(&[&src], &out);

    let files = Generator::new(&options).preview().unwrap();

    let code = files[0].content();
    assert!(code.contains(r#"fill="currentColor""#));
    assert!(code.contains(r#"viewBox="0 0 24 24""#));
    assert!(code.contains(r#"<text x="0" y="12">A</text>"#));
    assert!(!code.contains("exported by an editor"));
}

#[test]
fn test_line_breaks_are_collapsed_before_optimizing() {
    let temp = TempDir::new().unwrap();
    let src = icon_dir(temp.path(), "assets", &[("home.svg", "<svg>\r\n<g/>\n</svg>")]);
    let out = temp.path().join("dist");
    let options = options(&[&src], &out);

    let files = Generator::new(&options)
        .with_optimizer(Passthrough)
        .preview()
        .unwrap();

    assert!(files[0].content().contains("data: '<svg> <g/> </svg>'"));
}

#[test]
fn test_union_lists_every_icon_once() {
    let temp = TempDir::new().unwrap();
    let src = icon_dir(
        temp.path(),
        "assets",
        &[("c.svg", "<svg/>"), ("a.svg", "<svg/>"), ("b.svg", "<svg/>")],
    );
    let out = temp.path().join("dist");
    let options = options(&[&src], &out);

    let files = Generator::new(&options)
        .with_optimizer(Passthrough)
        .preview()
        .unwrap();

    let code = files[0].content();
    assert!(code.contains("export type Icons = 'a' | 'b' | 'c'"));
    assert!(!code.contains("| ;"));
}

#[test]
fn test_reruns_are_byte_identical() {
    let temp = TempDir::new().unwrap();
    let src = icon_dir(
        temp.path(),
        "assets",
        &[("home.svg", HOME_SVG), ("arrow-left.svg", HOME_SVG)],
    );
    let out = temp.path().join("dist");
    let options = options(&[&src], &out);

    Generator::new(&options).generate().unwrap();
    let first = fs::read(out.join("icons.ts")).unwrap();
    Generator::new(&options).generate().unwrap();
    let second = fs::read(out.join("icons.ts")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_later_source_wins_on_collision() {
    let temp = TempDir::new().unwrap();
    let first = icon_dir(temp.path(), "first", &[("icon.svg", "<svg>first</svg>")]);
    let second = icon_dir(temp.path(), "second", &[("icon.svg", "<svg>second</svg>")]);
    let out = temp.path().join("dist");
    let options = options(&[&first, &second], &out);

    let files = Generator::new(&options)
        .with_optimizer(Passthrough)
        .preview()
        .unwrap();

    let code = files[0].content();
    assert!(code.contains("<svg>second</svg>"));
    assert!(!code.contains("<svg>first</svg>"));
    assert_eq!(code.matches("export const icIcon").count(), 1);
}

#[test]
fn test_missing_source_directory_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("dist");
    let options = options(&[&temp.path().join("missing")], &out);

    let err = Generator::new(&options).generate().unwrap_err();

    assert!(matches!(*err, Error::ReadDir { .. }));
    assert!(!out.exists());
}

#[test]
fn test_optimizer_failure_aborts_batch() {
    let temp = TempDir::new().unwrap();
    let src = icon_dir(temp.path(), "assets", &[("home.svg", "<svg/>")]);
    let out = temp.path().join("dist");
    let options = options(&[&src], &out);

    let err = Generator::new(&options)
        .with_optimizer(Failing)
        .generate()
        .unwrap_err();

    match *err {
        Error::Optimize { file, .. } => assert_eq!(file, "home.svg"),
        other => panic!("expected Optimize error, got {other:?}"),
    }
    assert!(!out.exists());
}

#[test]
fn test_empty_source_directory_is_rejected() {
    let temp = TempDir::new().unwrap();
    let src = icon_dir(temp.path(), "assets", &[]);
    let out = temp.path().join("dist");
    let options = options(&[&src], &out);

    let err = Generator::new(&options).generate().unwrap_err();

    assert!(matches!(*err, Error::NoIcons { .. }));
    assert!(!out.exists());
}

#[test]
fn test_lazy_loading_writes_modules_model_and_index() {
    let temp = TempDir::new().unwrap();
    let src = icon_dir(
        temp.path(),
        "assets",
        &[("home.svg", "<svg>home</svg>"), ("user.svg", "<svg>user</svg>")],
    );
    let out = temp.path().join("dist");
    let options = ConversionOptions {
        strategy: svgts_options::OutputStrategy::LazyLoading,
        ..options(&[&src], &out)
    };

    let result = Generator::new(&options)
        .with_optimizer(Passthrough)
        .generate()
        .unwrap();

    assert_eq!(
        result.files,
        vec![
            out.join("ic-home.icon.ts"),
            out.join("ic-user.icon.ts"),
            out.join("icons.model.ts"),
            out.join("index.ts"),
        ]
    );

    let home = fs::read_to_string(out.join("ic-home.icon.ts")).unwrap();
    assert!(home.contains("import { Icon } from './icons.model'"));
    assert!(home.contains("export const icHome: Icon"));
    assert!(!home.contains("icUser"));

    let model = fs::read_to_string(out.join("icons.model.ts")).unwrap();
    assert!(model.contains("export type Icons = 'home' | 'user'"));
    assert!(model.contains("export interface Icon {"));

    let index = fs::read_to_string(out.join("index.ts")).unwrap();
    assert!(index.contains("export * from './ic-home.icon'"));
    assert!(index.contains("export * from './ic-user.icon'"));
    assert!(index.contains("export * from './icons.model'"));
}

#[test]
fn test_nested_missing_output_directory_fails() {
    let temp = TempDir::new().unwrap();
    let src = icon_dir(temp.path(), "assets", &[("home.svg", "<svg/>")]);
    let out = temp.path().join("does").join("not").join("exist");
    let options = options(&[&src], &out);

    let err = Generator::new(&options)
        .with_optimizer(Passthrough)
        .generate()
        .unwrap_err();

    assert!(matches!(*err, Error::CreateDir { .. }));
}
