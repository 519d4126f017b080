//! Drives both frame loops against a recording platform.

use doom_core::{
    AppConfig, Color, ContextConfig, Error, Platform, Spectrum, Surface, VIBGYOR, Vertex,
    WindowDescriptor, equilateral_triangle, run_color_toggle, run_triangle,
};
use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};
use tracing_test::traced_test;

#[derive(Debug, Clone, PartialEq)]
enum Call {
    CreateWindow {
        width: u32,
        height: u32,
        title: String,
    },
    MakeCurrent,
    Viewport(i32, i32, u32, u32),
    Clear(Color),
    CreateTriangle([Vertex; 3]),
    Draw,
    PollEvents,
    SwapBuffers,
    DeleteVertexArray,
    DeleteBuffer,
    DeleteProgram,
    DestroyWindow,
    Terminate,
}

type Log = Rc<RefCell<Vec<Call>>>;

#[derive(Default, Clone, Copy)]
struct Script {
    window_fails: bool,
    triangle_fails: bool,
    // 1-based index of the `should_close` check that returns true
    close_on_check: usize,
}

struct MockPlatform {
    log: Log,
    script: Script,
}

impl MockPlatform {
    fn new(script: Script) -> (Self, Log) {
        let log = Log::default();
        (
            Self {
                log: Rc::clone(&log),
                script,
            },
            log,
        )
    }
}

impl Platform for MockPlatform {
    type Surface = MockSurface;

    fn create_surface(&mut self, descriptor: &WindowDescriptor) -> Option<MockSurface> {
        self.log.borrow_mut().push(Call::CreateWindow {
            width: descriptor.width(),
            height: descriptor.height(),
            title: descriptor.title().to_owned(),
        });

        (!self.script.window_fails).then(|| MockSurface {
            log: Rc::clone(&self.log),
            script: self.script,
            checks: Cell::new(0),
        })
    }
}

impl Drop for MockPlatform {
    fn drop(&mut self) {
        self.log.borrow_mut().push(Call::Terminate);
    }
}

struct MockSurface {
    log: Log,
    script: Script,
    checks: Cell<usize>,
}

impl MockSurface {
    fn record(&self, call: Call) {
        self.log.borrow_mut().push(call);
    }
}

impl Surface for MockSurface {
    type Mesh = MockMesh;

    fn make_current(&mut self) {
        self.record(Call::MakeCurrent);
    }

    fn set_viewport(&mut self, x: i32, y: i32, width: u32, height: u32) {
        self.record(Call::Viewport(x, y, width, height));
    }

    fn clear(&mut self, color: Color) {
        self.record(Call::Clear(color));
    }

    fn create_triangle(&mut self, vertices: &[Vertex; 3]) -> Result<MockMesh, Error> {
        self.record(Call::CreateTriangle(*vertices));
        if self.script.triangle_fails {
            return Err(Error::Graphics {
                msg: "opengl couldn't compile shaders: 0:1(1): error".to_owned(),
            });
        }

        Ok(MockMesh {
            _vertex_array: Tracked::new(&self.log, Call::DeleteVertexArray),
            _buffer: Tracked::new(&self.log, Call::DeleteBuffer),
            _program: Tracked::new(&self.log, Call::DeleteProgram),
        })
    }

    fn draw(&mut self, _mesh: &MockMesh) {
        self.record(Call::Draw);
    }

    fn should_close(&self) -> bool {
        self.checks.set(self.checks.get() + 1);
        self.checks.get() >= self.script.close_on_check
    }

    fn poll_events(&mut self) {
        self.record(Call::PollEvents);
    }

    fn swap_buffers(&mut self) {
        self.record(Call::SwapBuffers);
    }
}

impl Drop for MockSurface {
    fn drop(&mut self) {
        self.record(Call::DestroyWindow);
    }
}

struct MockMesh {
    _vertex_array: Tracked,
    _buffer: Tracked,
    _program: Tracked,
}

struct Tracked {
    log: Log,
    on_drop: Call,
}

impl Tracked {
    fn new(log: &Log, on_drop: Call) -> Self {
        Self {
            log: Rc::clone(log),
            on_drop,
        }
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.log.borrow_mut().push(self.on_drop.clone());
    }
}

fn test_config() -> AppConfig {
    AppConfig {
        window: WindowDescriptor::new(800, 600, "Test").unwrap(),
        context: ContextConfig::default(),
    }
}

fn count(log: &[Call], call: &Call) -> usize {
    log.iter().filter(|c| *c == call).count()
}

fn clears(log: &[Call]) -> Vec<Color> {
    log.iter()
        .filter_map(|call| match call {
            Call::Clear(color) => Some(*color),
            _ => None,
        })
        .collect()
}

#[test]
fn toggle_runs_until_close_and_tears_down_once() {
    let (platform, log) = MockPlatform::new(Script {
        close_on_check: 5,
        ..Script::default()
    });

    let stats = run_color_toggle(platform, &test_config()).unwrap();
    let log = log.borrow();

    assert_eq!(stats.frames, 4);
    assert_eq!(
        log[..3],
        [
            Call::CreateWindow {
                width: 800,
                height: 600,
                title: "Test".to_owned()
            },
            Call::MakeCurrent,
            Call::Viewport(0, 0, 800, 600),
        ]
    );
    assert_eq!(count(&log, &Call::Viewport(0, 0, 800, 600)), 1);
    assert_eq!(count(&log, &Call::PollEvents), 4);
    assert_eq!(count(&log, &Call::SwapBuffers), 5);

    assert_eq!(count(&log, &Call::DestroyWindow), 1);
    assert_eq!(count(&log, &Call::Terminate), 1);
    assert_eq!(log[log.len() - 2..], [Call::DestroyWindow, Call::Terminate]);
}

#[test]
fn toggle_alternates_clear_color_each_frame() {
    let (platform, log) = MockPlatform::new(Script {
        close_on_check: 8,
        ..Script::default()
    });

    run_color_toggle(platform, &test_config()).unwrap();

    let clears = clears(&log.borrow());
    // Pre-loop clear plus one per frame
    assert_eq!(clears.len(), 8);
    for (iteration, color) in clears.iter().enumerate() {
        let expected = if iteration % 2 == 0 {
            Color::SKY
        } else {
            Color::BROWNISH
        };
        assert_eq!(*color, expected, "iteration {iteration}");
    }
}

#[test]
fn toggle_polls_before_clearing() {
    let (platform, log) = MockPlatform::new(Script {
        close_on_check: 2,
        ..Script::default()
    });

    run_color_toggle(platform, &test_config()).unwrap();

    let log = log.borrow();
    let frame = log
        .iter()
        .skip_while(|call| **call != Call::PollEvents)
        .take(3)
        .cloned()
        .collect::<Vec<_>>();
    assert_eq!(
        frame,
        [
            Call::PollEvents,
            Call::Clear(Color::BROWNISH),
            Call::SwapBuffers
        ]
    );
}

#[test]
fn closed_window_skips_the_loop() {
    let (platform, log) = MockPlatform::new(Script {
        close_on_check: 1,
        ..Script::default()
    });

    let stats = run_color_toggle(platform, &test_config()).unwrap();

    assert_eq!(stats.frames, 0);
    assert_eq!(clears(&log.borrow()), [Color::SKY]);
    assert_eq!(count(&log.borrow(), &Call::PollEvents), 0);
}

#[test]
fn triangle_draws_every_frame_and_deletes_in_order() {
    let (platform, log) = MockPlatform::new(Script {
        close_on_check: 5,
        ..Script::default()
    });
    let clear_color = Spectrum::Blue.color();

    let stats = run_triangle(platform, &test_config(), clear_color).unwrap();
    let log = log.borrow();

    assert_eq!(stats.frames, 4);
    assert_eq!(count(&log, &Call::Viewport(0, 0, 800, 600)), 1);
    assert_eq!(
        count(&log, &Call::CreateTriangle(equilateral_triangle(1.0))),
        1
    );
    assert_eq!(count(&log, &Call::Draw), 4);
    assert!(clears(&log).iter().all(|color| *color == VIBGYOR[2]));
    assert_eq!(clears(&log).len(), 5);

    assert_eq!(
        log[log.len() - 5..],
        [
            Call::DeleteVertexArray,
            Call::DeleteBuffer,
            Call::DeleteProgram,
            Call::DestroyWindow,
            Call::Terminate,
        ]
    );
    for teardown in [
        Call::DeleteVertexArray,
        Call::DeleteBuffer,
        Call::DeleteProgram,
        Call::DestroyWindow,
        Call::Terminate,
    ] {
        assert_eq!(count(&log, &teardown), 1, "{teardown:?}");
    }
}

#[test]
fn triangle_frame_order() {
    let (platform, log) = MockPlatform::new(Script {
        close_on_check: 2,
        ..Script::default()
    });
    let clear_color = Spectrum::Green.color();

    run_triangle(platform, &test_config(), clear_color).unwrap();

    let log = log.borrow();
    let frame = log
        .iter()
        .skip_while(|call| !matches!(call, Call::CreateTriangle(_)))
        // pre-loop clear and swap
        .skip(3)
        .take(4)
        .cloned()
        .collect::<Vec<_>>();
    assert_eq!(
        frame,
        [
            Call::Clear(clear_color),
            Call::Draw,
            Call::SwapBuffers,
            Call::PollEvents
        ]
    );
}

#[test]
#[traced_test]
fn toggle_window_failure_exits_with_minus_one() {
    let (platform, log) = MockPlatform::new(Script {
        window_fails: true,
        close_on_check: 5,
        ..Script::default()
    });

    let error = run_color_toggle(platform, &test_config()).unwrap_err();

    assert_eq!(error, Error::WindowCreation);
    assert_eq!(error.exit_code(), -1);
    assert_eq!(
        *log.borrow(),
        [
            Call::CreateWindow {
                width: 800,
                height: 600,
                title: "Test".to_owned()
            },
            Call::Terminate,
        ]
    );
    // The user-facing line is printed by the binary from the returned error
    logs_assert(|lines: &[&str]| {
        match lines
            .iter()
            .filter(|line| line.contains("Failed to create window"))
            .count()
        {
            0 => Ok(()),
            n => Err(format!("failure reported {n} times by the loop")),
        }
    });
    assert!(logs_contain("windowing layer refused to create the window"));
}

#[test]
#[traced_test]
fn triangle_window_failure_never_builds_the_mesh() {
    let (platform, log) = MockPlatform::new(Script {
        window_fails: true,
        close_on_check: 5,
        ..Script::default()
    });

    let error = run_triangle(platform, &test_config(), VIBGYOR[2]).unwrap_err();

    assert_eq!(error.exit_code(), -1);
    assert!(
        !log.borrow()
            .iter()
            .any(|call| matches!(call, Call::CreateTriangle(_) | Call::Draw))
    );
    assert_eq!(count(&log.borrow(), &Call::Terminate), 1);
    assert!(logs_contain("windowing layer refused to create the window"));
}

#[test]
fn shader_failure_still_releases_window_and_context() {
    let (platform, log) = MockPlatform::new(Script {
        triangle_fails: true,
        close_on_check: 5,
        ..Script::default()
    });

    let error = run_triangle(platform, &test_config(), VIBGYOR[2]).unwrap_err();

    assert!(matches!(error, Error::Graphics { .. }));
    assert_eq!(error.exit_code(), 1);

    let log = log.borrow();
    assert_eq!(count(&log, &Call::Draw), 0);
    assert_eq!(count(&log, &Call::DeleteProgram), 0);
    assert_eq!(log[log.len() - 2..], [Call::DestroyWindow, Call::Terminate]);
    assert_eq!(count(&log, &Call::DestroyWindow), 1);
}
