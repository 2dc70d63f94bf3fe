use std::path::Path;

use trestle_exec::executor::preview_requests;

use crate::exit_codes;
use crate::output::print_result;
use crate::{NodeArgs, OutputArgs};

use super::config::{load_items, load_node_config, parse_base_url};

pub async fn preview_cmd(
    items_path: &Path,
    base_url: Option<&str>,
    node: NodeArgs,
    output: OutputArgs,
) -> i32 {
    let node_config = match load_node_config(&node, &output) {
        Ok(c) => c,
        Err(code) => return code,
    };
    let items = match load_items(items_path, &output) {
        Ok(i) => i,
        Err(code) => return code,
    };
    let base_url = match parse_base_url(base_url, &output) {
        Ok(u) => u,
        Err(code) => return code,
    };

    let previews = preview_requests(&base_url, &items, &node_config.parameters.for_items(&items));
    print_result(output.format, output.quiet, &previews);
    exit_codes::SUCCESS
}
