use super::args::*;

pub mod connect;
pub mod create;
pub mod extract;
pub(crate) mod helpers;
pub mod issue;

pub async fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Command::Connect(args) => connect::run(args).await,
        Command::Extract(args) => extract::run(args),
        Command::Create(args) => create::run(args).await,
        Command::Issue(args) => issue::run(args).await,
    }
}
