use crate::*;

// Loads a lineup through the platform and deploys every unit in it
pub async fn deploy_internal<P: Platform>(platform: &P, lineup: &str) -> Result<Roster<P>, Error> {
    let lineup = platform.get_lineup(lineup).await?;
    log::debug!("deploying {} units", lineup.units.len());
    Roster::from_lineup(&lineup).await
}
