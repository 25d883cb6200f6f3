use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;
use tracing::{debug, warn};

use crate::error::{ChartError, ChartResult};
use crate::render::{RenderFrame, paint_frame};

type FrameQueue = Rc<RefCell<VecDeque<(String, RenderFrame)>>>;

/// Shows each frame in its own window, one after another: closing a window
/// opens the next. Blocks until the last window is closed.
pub fn present_frames(
    application_id: &str,
    frames: Vec<(String, RenderFrame)>,
) -> ChartResult<()> {
    if frames.is_empty() {
        return Ok(());
    }

    let app = gtk::Application::builder()
        .application_id(application_id)
        .build();
    let queue: FrameQueue = Rc::new(RefCell::new(frames.into_iter().collect()));

    app.connect_activate(move |app| open_next_window(app, &queue));

    // Process arguments belong to the binary, not to GTK.
    let status = app.run_with_args::<&str>(&[]);
    if status != gtk::glib::ExitCode::SUCCESS {
        return Err(ChartError::Backend(format!(
            "gtk application exited with {status:?}"
        )));
    }
    Ok(())
}

fn open_next_window(app: &gtk::Application, queue: &FrameQueue) {
    let Some((title, frame)) = queue.borrow_mut().pop_front() else {
        return;
    };
    debug!(title = %title, items = frame.len(), "opening frame window");

    let width = i32::try_from(frame.viewport.width).unwrap_or(i32::MAX);
    let height = i32::try_from(frame.viewport.height).unwrap_or(i32::MAX);

    let drawing_area = gtk::DrawingArea::new();
    drawing_area.set_content_width(width);
    drawing_area.set_content_height(height);
    drawing_area.set_draw_func(move |_area, context, _width, _height| {
        if let Err(err) = paint_frame(context, &frame) {
            warn!(error = %err, "failed to paint frame");
        }
    });

    let window = gtk::ApplicationWindow::builder()
        .application(app)
        .title(title.as_str())
        .default_width(width)
        .default_height(height)
        .build();
    window.set_child(Some(&drawing_area));

    window.connect_close_request({
        let app = app.clone();
        let queue = Rc::clone(queue);
        move |_window| {
            open_next_window(&app, &queue);
            gtk::glib::Propagation::Proceed
        }
    });
    window.present();
}
