/**
 * Compiles resources/bd_*.txt into the static region tables included by src/generated.
 */

use std::{collections::HashSet, env, fmt::Write as _, fs::{self, File}, io::{BufRead, BufReader}, path::Path};

use thiserror::Error;

#[derive(Debug, Error)]
enum BuildError {
    #[error("IO error occurred: {0}")]
    IO(#[from] std::io::Error),

    #[error("{path}:{line_num}: line is too long (max is {max_len} bytes)")]
    LineTooLong { path: String, line_num: usize, max_len: usize },

    #[error("{path}:{line_num}: expected {expected} '|'-separated fields, got {got}")]
    FieldCount { path: String, line_num: usize, expected: usize, got: usize },

    #[error("{path}:{line_num}: value '{value}' must be non-empty lowercase ascii, digits or '-'")]
    InvalidValue { path: String, line_num: usize, value: String },

    #[error("{path}:{line_num}: duplicate value '{value}'")]
    DuplicateValue { path: String, line_num: usize, value: String },

    #[error("{path}:{line_num}: parent '{parent}' is not declared in {parent_path}")]
    UnknownParent { path: String, line_num: usize, parent: String, parent_path: String },
}

struct ChoiceLine {
    value: String,
    label: String,
    parent: Option<String>,
    line_num: usize,
}

fn is_valid_value(value: &str) -> bool {
    !value.is_empty()
        && value.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

/// Reads `value|label` (or `value|label|parent` when `with_parent`) lines.
fn parse_choices(path: &str, with_parent: bool) -> Result<Vec<ChoiceLine>, BuildError> {
    let input = File::open(path)?;
    const MAX_LINE_LENGTH: usize = 2 * 1024;
    let expected = if with_parent { 3 } else { 2 };

    let mut reader = BufReader::new(input);
    let mut line_buffer = String::with_capacity(MAX_LINE_LENGTH);
    let mut line_number = 0;
    let mut seen = HashSet::new();
    let mut choices = Vec::new();

    loop {
        line_number += 1;
        line_buffer.clear();

        let bytes_read = reader.read_line(&mut line_buffer)?;
        if bytes_read == 0 {
            break;
        }

        if bytes_read > MAX_LINE_LENGTH {
            return Err(BuildError::LineTooLong {
                path: path.to_string(),
                line_num: line_number,
                max_len: MAX_LINE_LENGTH,
            });
        }

        let line = line_buffer.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split('|').map(str::trim).collect();
        if fields.len() != expected {
            return Err(BuildError::FieldCount {
                path: path.to_string(),
                line_num: line_number,
                expected,
                got: fields.len(),
            });
        }
        let value = fields[0];
        if !is_valid_value(value) {
            return Err(BuildError::InvalidValue {
                path: path.to_string(),
                line_num: line_number,
                value: value.to_string(),
            });
        }
        if !seen.insert(value.to_string()) {
            return Err(BuildError::DuplicateValue {
                path: path.to_string(),
                line_num: line_number,
                value: value.to_string(),
            });
        }
        choices.push(ChoiceLine {
            value: value.to_string(),
            label: fields[1].to_string(),
            parent: fields.get(2).map(|p| p.to_string()),
            line_num: line_number,
        });
    }

    Ok(choices)
}

fn check_parents(
    path: &str, choices: &[ChoiceLine], parent_path: &str, parents: &[ChoiceLine]
) -> Result<(), BuildError> {
    let known: HashSet<&str> = parents.iter().map(|p| p.value.as_str()).collect();
    for choice in choices {
        if let Some(parent) = &choice.parent {
            if !known.contains(parent.as_str()) {
                return Err(BuildError::UnknownParent {
                    path: path.to_string(),
                    line_num: choice.line_num,
                    parent: parent.clone(),
                    parent_path: parent_path.to_string(),
                });
            }
        }
    }
    Ok(())
}

fn write_table(out: &mut String, doc: &str, name: &str, choices: &[ChoiceLine]) {
    let _ = writeln!(out, "/// {doc}");
    let _ = writeln!(out, "pub static {name}: &[(&str, &str)] = &[");
    for choice in choices {
        let _ = writeln!(out, "    ({:?}, {:?}),", choice.value, choice.label);
    }
    out.push_str("];\n\n");
}

fn write_parents(out: &mut String, doc: &str, name: &str, choices: &[ChoiceLine]) {
    let _ = writeln!(out, "/// {doc}");
    let _ = writeln!(out, "pub static {name}: &[&str] = &[");
    for choice in choices {
        let _ = writeln!(out, "    {:?},", choice.parent.as_deref().unwrap_or_default());
    }
    out.push_str("];\n\n");
}

fn main() -> Result<(), BuildError> {
    const DIVISIONS: &str = "resources/bd_divisions.txt";
    const DISTRICTS: &str = "resources/bd_districts.txt";
    const UPAZILAS: &str = "resources/bd_upazilas.txt";

    for path in [DIVISIONS, DISTRICTS, UPAZILAS] {
        println!("cargo:rerun-if-changed={path}");
    }

    let divisions = parse_choices(DIVISIONS, false)?;
    let districts = parse_choices(DISTRICTS, true)?;
    let upazilas = parse_choices(UPAZILAS, true)?;
    check_parents(DISTRICTS, &districts, DIVISIONS, &divisions)?;
    check_parents(UPAZILAS, &upazilas, DISTRICTS, &districts)?;

    let mut out = String::from("// Generated by build/rust_build.rs. Do not edit.\n\n");
    write_table(&mut out, "Divisions of Bangladesh.", "DIVISION_CHOICES", &divisions);
    write_table(&mut out, "Districts of Bangladesh, grouped by division.", "DISTRICT_CHOICES", &districts);
    write_table(&mut out, "Upazilas of Bangladesh, grouped by district.", "UPAZILLA_CHOICES", &upazilas);
    write_parents(&mut out, "Division value of each entry in `DISTRICT_CHOICES`, same order.", "DISTRICT_DIVISIONS", &districts);
    write_parents(&mut out, "District value of each entry in `UPAZILLA_CHOICES`, same order.", "UPAZILLA_DISTRICTS", &upazilas);

    let out_dir = env::var_os("OUT_DIR").ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "OUT_DIR is not set")
    })?;
    fs::write(Path::new(&out_dir).join("bd_divisions.rs"), out)?;
    Ok(())
}
