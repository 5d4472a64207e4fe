use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ReservationFields;
use crate::store::DataStore;
use tracing::info;

pub fn run<S: DataStore>(store: &mut S, fields: ReservationFields) -> Result<CmdResult> {
    let reservation = store.create_reservation(fields)?;
    info!(id = reservation.id, destination = %reservation.destination, "reservation created");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Reservation created ({}): {} to {}",
        reservation.id, reservation.name, reservation.destination
    )));
    Ok(result.with_affected(vec![reservation]))
}
