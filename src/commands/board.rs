//! `leadboard board`: print the starting board once.

use anyhow::Result;

use crate::board::{render_board, Board};
use crate::config::Config;
use crate::models::SortKey;
use crate::view::project;

pub fn show(config: &Config, sort: Option<SortKey>) -> Result<()> {
    let board = Board::from_config(&config.board);
    let sort_key = sort.unwrap_or(board.sort_key());
    print!("{}", render_board(&project(board.store().list(), sort_key)));
    Ok(())
}
