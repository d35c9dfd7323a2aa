use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead};
use std::path;

pub const DAT_PATH_RELATIVE: &str = "test_fixtures";

// The trailing colon simplifies the consuming logic a little.
const FIXTURE_VERSION_TAG: &str = "1:";

// Given a fixture base name, return the standard path to its dat file.
pub fn get_data_path(name_base: &str) -> std::io::Result<path::PathBuf> {
    let mut filename_dat = name_base.to_owned();
    filename_dat.push_str(".dat");
    let dir_base = std::env::current_dir()?;
    Ok(dir_base.join(DAT_PATH_RELATIVE).join(filename_dat))
}

// Convert a string to f64, handling the special spellings used in fixtures.
pub fn as_f64(s: &str) -> Result<f64, Box<dyn Error + Sync + Send>> {
    match s {
        "nan" => Ok(std::f64::NAN),
        "-nan" => Ok(-std::f64::NAN),
        "inf" => Ok(std::f64::INFINITY),
        "-inf" => Ok(std::f64::NEG_INFINITY),
        _ => match s.parse::<f64>() {
            Ok(num) => Ok(num),
            Err(err) => Err(Box::<dyn Error + Sync + Send>::from(err.to_string())),
        },
    }
}

// Given an operation name, open the corresponding fixture file.
pub fn read_dat_file(op_name: &str) -> File {
    let path = get_data_path(op_name).expect("Failed to determine dat file path");
    match File::open(path.as_path()) {
        Ok(file) => file,
        Err(error) => panic!(
            "Failed to open fixture {}\nError: {}\nTests must be run from the repository root.",
            path.display(),
            error
        ),
    }
}

// Extract a specified number of values from each data line,
// and return as a vector of vectors. A negative arg_count keeps every value.
pub fn as_vecs_basic(op_name: &str, arg_count: isize) -> Vec<Vec<f64>> {
    let file = read_dat_file(op_name);
    let reader = io::BufReader::new(file);
    reader
        .lines()
        .enumerate()
        // Skip the header line
        .filter(|(i, _line)| *i != 0)
        .map(|(_i, line)| line.expect("Failed to read line"))
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            line.split_whitespace()
                .enumerate()
                .filter(|(i, _item)| arg_count < 0 || *i < arg_count as usize)
                .map(|(_i, item)| as_f64(item).expect("Failed to parse item"))
                .collect()
        })
        .collect()
}

fn confirm_dat_header(op_name: &str, first_line: &str) {
    // operation version: field names...
    let items: Vec<&str> = first_line.split(' ').collect();
    assert!(items.len() > 2, "Expected at least 2 spaces in data file header line");
    assert_eq!(items[0], op_name, "Data file header names a different operation");
    assert_eq!(items[1], FIXTURE_VERSION_TAG, "Unexpected fixture version in data file header line");
}

// Centralized logic for reading through a fixture file.
// Each file has a single header line naming the operation, the fixture version,
// and the meaning of each value. Every further non-blank line is a
// whitespace-separated list of values.
// op_name: The base name of the data file to look for.
// arg_count: The number of values expected on each data line, or negative to skip this check.
// Calls function f with the 1-based line number and the values of each data line.
pub fn test_basic<T>(op_name: &str, arg_count: isize, f: T)
where
    T: Fn(usize, &Vec<f64>),
{
    let file = read_dat_file(op_name);
    let reader = io::BufReader::new(file);
    let mut data_lines = 0;
    reader.lines().enumerate().for_each(|(i, line)| {
        let line_safe = line.expect("Failed to read line");
        if i == 0 {
            confirm_dat_header(op_name, &line_safe);
            return;
        }
        if line_safe.trim().is_empty() {
            return;
        }
        let items: Vec<f64> = line_safe
            .split_whitespace()
            .enumerate()
            .map(|(j, item)| match as_f64(item) {
                Ok(parsed) => parsed,
                Err(_error) => panic!("Error parsing item {} on line {}: {}", j + 1, i + 1, item),
            })
            .collect();
        assert!(
            arg_count < 0 || items.len() == arg_count as usize,
            "Expected {} items per line. Line {} had {}: {}",
            arg_count,
            i + 1,
            items.len(),
            line_safe
        );
        data_lines += 1;
        // Report 1-based line number, rather than 0-based
        f(i + 1, &items);
    });
    assert!(data_lines > 0, "Fixture {} has no data lines", op_name);
}

// When displaying f64, Rust declines to display the sign for -nan.
// Returns the sign to print in front of x.abs().
pub fn help_sign(x: f64) -> String {
    if x.is_sign_negative() {
        "-".to_string()
    } else {
        "".to_string()
    }
}
