use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ReservationId;
use crate::store::DataStore;
use tracing::info;

pub fn run<S: DataStore>(store: &mut S, id: ReservationId) -> Result<CmdResult> {
    let reservation = store.delete_reservation(id)?;
    info!(id, "reservation deleted");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Reservation deleted ({}): {}",
        id, reservation.name
    )));
    Ok(result.with_affected(vec![reservation]))
}
