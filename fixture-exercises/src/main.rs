// Copyright (c) The tmc-tester Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use clap::Parser;
use color_eyre::Result;
use tmc_harness::dispatch::App;

fn main() -> Result<()> {
    color_eyre::install()?;

    let app = App::parse();
    let code = app.exec(&fixture_exercises::check_list())?;
    std::process::exit(code);
}
