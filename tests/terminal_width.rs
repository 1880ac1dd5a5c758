//! Terminal width detection through the `COLUMNS` override.
//!
//! These tests mutate the process environment and run serially.

mod common;

use common::{init_test_logging, with_env_var, without_env_var};
use serial_test::serial;
use termgrid::prelude::*;
use termgrid::terminal::{COLUMNS_ENV, get_terminal_width};

fn wide_header_table() -> Table {
    let mut table = Table::new(["id", "name", "too long header super name"]);
    table.column_mut(0).expect("id").header_style = ColumnStyle::new().padding_x(2, 1);
    table
}

#[test]
#[serial]
fn columns_env_sets_width() {
    init_test_logging();
    with_env_var(COLUMNS_ENV, "24", || {
        assert_eq!(get_terminal_width(), 24);
        assert_eq!(WidthSource::Terminal.width(), 24);
    });
}

#[test]
#[serial]
fn columns_env_drives_default_render() {
    init_test_logging();
    let table = wide_header_table();
    let rendered = with_env_var(COLUMNS_ENV, "24", || table.render());
    assert_eq!(rendered, table.render_for(24));
    assert_eq!(rendered.lines().count(), 7);
}

#[test]
#[serial]
fn columns_env_read_on_every_render() {
    init_test_logging();
    let table = wide_header_table();
    let narrow = with_env_var(COLUMNS_ENV, "24", || table.render());
    let wide = with_env_var(COLUMNS_ENV, "200", || table.render());
    assert_ne!(narrow, wide);
    assert_eq!(wide, table.render_for(0));
}

#[test]
#[serial]
fn invalid_columns_env_is_ignored() {
    init_test_logging();
    let detected = without_env_var(COLUMNS_ENV, get_terminal_width);
    for value in ["0", "-5", "abc", ""] {
        with_env_var(COLUMNS_ENV, value, || {
            assert_eq!(get_terminal_width(), detected, "COLUMNS={value:?}");
        });
    }
}

#[test]
#[serial]
fn explicit_sources_ignore_columns_env() {
    init_test_logging();
    let table = wide_header_table();
    with_env_var(COLUMNS_ENV, "24", || {
        let fixed = table.clone().with_width_source(WidthSource::Unconstrained);
        assert_eq!(fixed.render(), table.render_for(0));

        let custom = table.clone().with_width_source(WidthSource::custom(|| 31));
        assert_eq!(custom.render(), table.render_for(31));
    });
}
