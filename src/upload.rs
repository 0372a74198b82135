use core::fmt::Write as _;

use embedded_io_async::Write;
use heapless::String;

use crate::constants::{DEFAULT_HTTP_PORT, REQUEST_BUFFER_SIZE};
use crate::network::UploadTarget;

#[derive(Debug)]
pub enum Error {
    Format,
    Transport,
}

/// One value of one sensor, as stored by the server.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorReading {
    pub sensor_id: u16,
    pub value: f32,
}

/// Builds the GET request the server script turns into a row of sensor data.
pub fn format_request(
    target: &UploadTarget<'_>,
    reading: &SensorReading,
) -> Result<String<REQUEST_BUFFER_SIZE>, Error> {
    // the server stores the value in a numeric column
    if !reading.value.is_finite() {
        return Err(Error::Format);
    }

    let mut request: String<REQUEST_BUFFER_SIZE> = String::new();

    write!(
        request,
        "GET {}?locationId={}&sensorId={}&value={:.1} HTTP/1.1\r\n",
        target.path, target.location_id, reading.sensor_id, reading.value
    )
    .map_err(|_| Error::Format)?;

    let host = if target.port == DEFAULT_HTTP_PORT {
        write!(request, "Host: {}\r\n", target.host)
    } else {
        write!(request, "Host: {}:{}\r\n", target.host, target.port)
    };
    host.map_err(|_| Error::Format)?;

    write!(request, "Connection: close\r\n\r\n").map_err(|_| Error::Format)?;

    Ok(request)
}

/// Writes the upload request for `reading` to an already connected transport.
///
/// Returns the number of bytes sent. Opening the connection and reading the
/// response stay with the caller.
pub async fn send_request<W: Write>(
    transport: &mut W,
    target: &UploadTarget<'_>,
    reading: &SensorReading,
) -> Result<usize, Error> {
    let request = format_request(target, reading)?;
    log::debug!(
        "Upload request: {}",
        request.lines().next().unwrap_or_default()
    );

    transport.write_all(request.as_bytes()).await.map_err(|e| {
        log::error!("Failed to write upload request: {:?}", e);
        Error::Transport
    })?;
    transport.flush().await.map_err(|e| {
        log::error!("Failed to flush upload request: {:?}", e);
        Error::Transport
    })?;

    log::info!(
        "Sensor {} value {:.1} sent to {}:{}",
        reading.sensor_id,
        reading.value,
        target.host,
        target.port
    );
    Ok(request.len())
}
