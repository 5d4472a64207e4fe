use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{ReservationFields, ReservationId};
use crate::store::DataStore;
use tracing::info;

pub fn run<S: DataStore>(
    store: &mut S,
    id: ReservationId,
    fields: ReservationFields,
) -> Result<CmdResult> {
    let reservation = store.update_reservation(id, fields)?;
    info!(id, "reservation updated");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Reservation updated ({}): {}",
        id, reservation.name
    )));
    Ok(result.with_affected(vec![reservation]))
}
