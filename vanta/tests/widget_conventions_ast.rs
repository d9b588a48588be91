use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use syn::{Fields, Item, UseTree, Visibility};

#[test]
fn given_widgets_when_validating_conventions_then_all_modules_comply() {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let widgets_dir = manifest_dir.join("src/widgets");
    let mod_rs = widgets_dir.join("mod.rs");

    let mut violations: Vec<String> = Vec::new();

    let mod_file = parse(&mod_rs);
    let mut declared_modules = BTreeSet::new();
    for item in &mod_file.items {
        if let Item::Mod(item_mod) = item {
            if is_pub_crate(&item_mod.vis) && item_mod.content.is_none() {
                declared_modules.insert(item_mod.ident.to_string());
            } else {
                violations.push(format!(
                    "{}: module declaration '{}' must be pub(crate) mod <name>;",
                    mod_rs.display(),
                    item_mod.ident
                ));
            }
        }
    }

    let mut fs_modules = BTreeSet::new();
    for path in dir_entries(&widgets_dir) {
        if path.is_dir() {
            fs_modules.insert(file_stem(&path));
        } else if path.file_name().is_some_and(|name| name != "mod.rs") {
            violations.push(format!(
                "{}: widgets live in their own directory",
                path.display()
            ));
        }
    }

    if declared_modules != fs_modules {
        violations.push(format!(
            "{}: declared modules {:?} do not match widget directories {:?}",
            mod_rs.display(),
            declared_modules,
            fs_modules
        ));
    }

    for module in &declared_modules {
        validate_widget_dir(&widgets_dir.join(module), &mut violations);
    }

    assert!(
        violations.is_empty(),
        "widget convention violations:\n{}",
        violations.join("\n")
    );
}

fn validate_widget_dir(dir: &Path, violations: &mut Vec<String>) {
    let prefix = snake_to_pascal_case(&file_stem(dir));

    for required in ["mod.rs", "event.rs", "reducer.rs"] {
        if !dir.join(required).is_file() {
            violations.push(format!(
                "{}: missing {required}",
                dir.display()
            ));
        }
    }

    let mod_rs = dir.join("mod.rs");
    if mod_rs.is_file() {
        let widget = format!("{prefix}Widget");
        let has_widget = parse(&mod_rs).items.iter().any(|item| {
            matches!(item, Item::Struct(s) if s.ident == widget.as_str())
        });
        if !has_widget {
            violations.push(format!(
                "{}: expected struct {widget}",
                mod_rs.display()
            ));
        }
    }

    let event_rs = dir.join("event.rs");
    if event_rs.is_file() {
        validate_event_file(&event_rs, &prefix, violations);
    }

    for path in rust_files(dir) {
        let source = read(&path);
        let file = parse(&path);

        for item in &file.items {
            if let Item::Use(item_use) = item {
                if use_tree_has_glob(&item_use.tree) {
                    violations.push(format!(
                        "{}: wildcard use/import is forbidden",
                        path.display()
                    ));
                }
            }
        }

        if source.contains("crate::app::") {
            violations.push(format!(
                "{}: widgets must not depend on the app event type",
                path.display()
            ));
        }
        if source.contains("crate::routers::") {
            violations.push(format!(
                "{}: widgets must not depend on routers",
                path.display()
            ));
        }
    }

    for path in view_files(dir) {
        let source = read(&path);
        for forbidden in [
            "log::",
            "std::fs::",
            "tokio::",
            "Task::",
            "iced::Task",
            "Instant::now",
        ] {
            if source.contains(forbidden) {
                violations.push(format!(
                    "{}: forbidden side-effect pattern in view: {forbidden}",
                    path.display()
                ));
            }
        }
    }
}

fn validate_event_file(
    path: &Path,
    prefix: &str,
    violations: &mut Vec<String>,
) {
    let file = parse(path);
    let intent = format!("{prefix}Intent");
    let event = format!("{prefix}Event");

    let enums: Vec<_> = file
        .items
        .iter()
        .filter_map(|item| match item {
            Item::Enum(item_enum) => Some(item_enum),
            _ => None,
        })
        .collect();

    if !enums.iter().any(|e| e.ident == intent.as_str()) {
        violations.push(format!("{}: expected enum {intent}", path.display()));
    }

    match enums.iter().find(|e| e.ident == event.as_str()) {
        Some(item_enum) => {
            let wraps_intent = item_enum.variants.iter().any(|variant| {
                variant.ident == "Intent"
                    && matches!(&variant.fields, Fields::Unnamed(f) if f.unnamed.len() == 1)
            });
            if !wraps_intent {
                violations.push(format!(
                    "{}: {event} must have an Intent({intent}) variant",
                    path.display()
                ));
            }
        },
        None => {
            violations.push(format!("{}: expected enum {event}", path.display()))
        },
    }

    for item_enum in enums {
        let name = item_enum.ident.to_string();
        if !name.starts_with(prefix) {
            violations.push(format!(
                "{}: event contract '{name}' must start with widget prefix '{prefix}'",
                path.display()
            ));
        }
    }
}

fn view_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let view_rs = dir.join("view.rs");
    if view_rs.is_file() {
        files.push(view_rs);
    }
    let view_dir = dir.join("view");
    if view_dir.is_dir() {
        files.extend(rust_files(&view_dir));
    }
    files
}

fn rust_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for path in dir_entries(dir) {
        if path.is_dir() {
            files.extend(rust_files(&path));
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            files.push(path);
        }
    }
    files
}

fn dir_entries(dir: &Path) -> Vec<PathBuf> {
    let entries = fs::read_dir(dir).unwrap_or_else(|err| {
        panic!("failed to read dir {}: {err}", dir.display())
    });
    let mut paths: Vec<PathBuf> = entries
        .map(|entry| {
            entry
                .unwrap_or_else(|err| panic!("failed to read dir entry: {err}"))
                .path()
        })
        .collect();
    paths.sort();
    paths
}

fn read(path: &Path) -> String {
    fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()))
}

fn parse(path: &Path) -> syn::File {
    syn::parse_file(&read(path)).unwrap_or_else(|err| {
        panic!("failed to parse {}: {err}", path.display())
    })
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .unwrap_or_else(|| panic!("missing stem for {}", path.display()))
        .to_string_lossy()
        .to_string()
}

fn snake_to_pascal_case(value: &str) -> String {
    value
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            let Some(first) = chars.next() else {
                return String::new();
            };
            let mut pascal = String::new();
            pascal.extend(first.to_uppercase());
            pascal.push_str(chars.as_str());
            pascal
        })
        .collect::<String>()
}

fn use_tree_has_glob(tree: &UseTree) -> bool {
    match tree {
        UseTree::Glob(_) => true,
        UseTree::Group(group) => group.items.iter().any(use_tree_has_glob),
        UseTree::Path(path) => use_tree_has_glob(&path.tree),
        UseTree::Name(_) | UseTree::Rename(_) => false,
    }
}

fn is_pub_crate(vis: &Visibility) -> bool {
    match vis {
        Visibility::Restricted(restricted) => {
            restricted.in_token.is_none() && restricted.path.is_ident("crate")
        },
        _ => false,
    }
}
