use crate::cli::load;
use crate::cli::session::Terminal;
use crate::opt::Quiz;
use ampere_core::quiz::QuizSession;
use anyhow::{Result, anyhow};

pub(crate) async fn quiz(opt: Quiz) -> Result<()> {
    let page = load::page(&opt.file).await?;
    let Some(config) = &page.quiz else {
        return Err(anyhow!("page `{}` has no quiz", page.id));
    };

    let mut session = QuizSession::new(config);
    println!("{} ({} questions)\n", session.title(), session.len());
    Terminal::new()?.run(&mut session, true)?;
    Ok(())
}
