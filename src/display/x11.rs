//! X11 root window: status publishing and raw button input
//!
//! One connection serves both paths and is only ever used from the run
//! loop, so the display has a single owner.

use anyhow::{anyhow, Context, Result};
use dwmbar_core::{DisplayError, Point, PressSource, PublishError, Publisher, StatusString};
use log::{debug, info, trace, warn};
use x11rb::connection::{Connection, RequestConnection};
use x11rb::protocol::xinput::{self, ConnectionExt as _};
use x11rb::protocol::xproto::{AtomEnum, ConnectionExt as _, PropMode, Window};
use x11rb::protocol::Event;
use x11rb::rust_connection::RustConnection;
use x11rb::wrapper::ConnectionExt as _;

/// Connection to the X server plus the root window of the default screen
pub struct RootWindow {
    conn: RustConnection,
    root: Window,
    raw_input: bool,
}

impl RootWindow {
    /// Connect to `display`, or to `$DISPLAY` when `None`
    pub fn connect(display: Option<&str>) -> Result<Self> {
        let (conn, screen_num) = x11rb::connect(display).context("Failed to open display")?;
        let root = conn
            .setup()
            .roots
            .get(screen_num)
            .map(|screen| screen.root)
            .ok_or_else(|| anyhow!("Screen {} not found", screen_num))?;

        info!("Connected to X display, root window 0x{:x}", root);

        Ok(Self {
            conn,
            root,
            raw_input: false,
        })
    }

    /// Subscribe to XInput2 raw button presses on the root window.
    ///
    /// Returns false, with a warning, if the server lacks XInput 2.
    pub fn select_raw_button_presses(&mut self) -> Result<bool> {
        if self
            .conn
            .extension_information(xinput::X11_EXTENSION_NAME)
            .context("Failed to query XInputExtension")?
            .is_none()
        {
            warn!("X server has no XInputExtension, click watching disabled");
            return Ok(false);
        }

        let version = self
            .conn
            .xinput_xi_query_version(2, 0)
            .context("Failed to send XIQueryVersion")?
            .reply()
            .context("XIQueryVersion failed")?;
        if version.major_version < 2 {
            warn!(
                "XInput {}.{} is too old for raw events, click watching disabled",
                version.major_version, version.minor_version
            );
            return Ok(false);
        }

        let mask = xinput::EventMask {
            deviceid: xinput::Device::ALL_MASTER.into(),
            mask: vec![xinput::XIEventMask::RAW_BUTTON_PRESS.into()],
        };
        self.conn
            .xinput_xi_select_events(self.root, &[mask])
            .context("Failed to send XISelectEvents")?
            .check()
            .context("XISelectEvents failed")?;

        debug!(
            "Selected raw button presses (XInput {}.{})",
            version.major_version, version.minor_version
        );
        self.raw_input = true;
        Ok(true)
    }

    fn pointer_position(&self) -> Result<Point, DisplayError> {
        let reply = self
            .conn
            .query_pointer(self.root)
            .map_err(DisplayError::new)?
            .reply()
            .map_err(DisplayError::new)?;
        Ok(Point::new(reply.root_x.into(), reply.root_y.into()))
    }
}

impl Publisher for RootWindow {
    /// Equivalent of XStoreName + XSync: `check()` waits for the server to
    /// process the request, so the title is visible on return.
    fn publish(&mut self, status: &StatusString) -> Result<(), PublishError> {
        self.conn
            .change_property8(
                PropMode::REPLACE,
                self.root,
                AtomEnum::WM_NAME,
                AtomEnum::STRING,
                status.as_bytes(),
            )
            .map_err(DisplayError::new)?
            .check()
            .map_err(DisplayError::new)?;
        Ok(())
    }
}

impl PressSource for RootWindow {
    fn pending_presses(&mut self) -> Result<Vec<Point>, DisplayError> {
        let mut presses = Vec::new();

        // Drain everything queued, even when not subscribed, so the queue
        // can't grow without bound.
        while let Some(event) = self.conn.poll_for_event().map_err(DisplayError::new)? {
            match event {
                Event::XinputRawButtonPress(press) if self.raw_input => {
                    let point = self.pointer_position()?;
                    trace!("Raw press of button {} at ({}, {})", press.detail, point.x, point.y);
                    presses.push(point);
                }
                Event::Error(e) => warn!("X error: {:?}", e),
                other => trace!("Ignoring event {:?}", other),
            }
        }

        Ok(presses)
    }
}
