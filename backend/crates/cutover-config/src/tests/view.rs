use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};
use crate::view_config::{MAX_DAY_WIDTH_PX, MAX_PADDING_DAYS, MIN_DAY_WIDTH_PX};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, err, ok};
use serial_test::serial;

const ABOVE_MAX_PADDING: u32 = MAX_PADDING_DAYS + 1;
const BELOW_MIN_WIDTH: u32 = MIN_DAY_WIDTH_PX - 1;
const ABOVE_MAX_WIDTH: u32 = MAX_DAY_WIDTH_PX + 1;

#[test]
#[serial]
fn given_zero_padding_when_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();
    let _padding = EnvGuard::set("CUTOVER_VIEW_PADDING_DAYS", "0");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_padding_above_max_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _padding = EnvGuard::set(
        "CUTOVER_VIEW_PADDING_DAYS",
        &ABOVE_MAX_PADDING.to_string(),
    );

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
    assert_that!(
        format!("{}", result.unwrap_err()),
        contains_substring("view.padding_days")
    );
}

#[test]
#[serial]
fn given_day_width_out_of_range_when_validate_then_error() {
    for width in [BELOW_MIN_WIDTH, ABOVE_MAX_WIDTH] {
        // Given
        let _temp = setup_config_dir();
        let _width = EnvGuard::set("CUTOVER_VIEW_DAY_WIDTH_PX", &width.to_string());

        // When
        let result = Config::load().unwrap().validate();

        // Then
        assert_that!(result, err(anything()));
    }
}
