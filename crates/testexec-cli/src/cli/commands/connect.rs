//! `testexec connect` - check the tracker connection and credentials.

use anyhow::Result;
use testexec_tracker::TrackerError;

use crate::cli::args::ConnectArgs;
use crate::exit_codes::{SUCCESS, TRACKER_ERROR};

use super::helpers::open_session;

pub async fn run(args: ConnectArgs) -> Result<i32> {
    let session = open_session(&args.tracker, None)?;

    let checked = async {
        let info = session.server_info().await?;
        let user = session.myself().await?;
        Ok::<_, TrackerError>((info, user))
    }
    .await;

    match checked {
        Ok((info, user)) => {
            println!(
                "Connected to {} ({}) at {} as {}",
                info.server_title.as_deref().unwrap_or("tracker"),
                info.version.as_deref().unwrap_or("unknown version"),
                session.base_url(),
                user.label()
            );
            Ok(SUCCESS)
        }
        Err(e) if e.is_connectivity() => {
            eprintln!("Error connecting: {e}");
            Ok(TRACKER_ERROR)
        }
        Err(e) => {
            eprintln!("Unknown error: {e}");
            Ok(e.exit_code())
        }
    }
}
