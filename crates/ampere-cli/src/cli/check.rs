use crate::cli::input::Input;
use crate::cli::session::Terminal;
use crate::cli::{load, render};
use crate::opt::Check;
use ampere_core::check::InlineCheck;
use anyhow::{Result, anyhow};

pub(crate) async fn check(opt: Check) -> Result<()> {
    let page = load::page(&opt.file).await?;
    let Some(config) = page.check(&opt.id) else {
        let known: Vec<&str> = page.checks.keys().map(String::as_str).collect();
        return Err(anyhow!("page `{}` has no check `{}`, known checks: {known:?}", page.id, opt.id));
    };

    let mut check = InlineCheck::new(config);
    let mut terminal = Terminal::new()?;
    println!("{}", render::question(&check.view(), false));
    while check.evaluation().is_none() {
        match terminal.read(check.id(), check.view().options.len())? {
            Some(Input::Choice(option)) => {
                check.select(option)?;
            }
            Some(Input::Reset) => println!("Nothing to reset yet."),
            Some(Input::Exit) | None => return Ok(()),
        }
    }
    println!("{}", render::question(&check.view(), false));
    Ok(())
}
