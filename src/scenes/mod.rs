//! The tutorial programs.
//!
//! They used to be separate executables that differed only in their shaders, their vertex data
//! and what they did with uniforms each frame. Here each one is a [`Demo`]: a pair of GLSL
//! sources, a [`Geometry`] and a [`Scene`].

pub mod colour;
pub mod first_person;
pub mod slide;

use std::fmt;
use std::str::FromStr;

use ::camera::CameraInput;

use crate::graphics::driver::ShaderDriver;
use crate::graphics::shader::{Program, ShaderError};
use crate::window::FrameSize;

use self::colour::ColourScene;
use self::first_person::CameraScene;
use self::slide::SlideScene;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Demo {
    HelloTriangle,
    Shaders,
    VertexBuffers,
    MatsAndVecs,
    VirtualCamera,
}

pub const ALL_DEMOS: [Demo; 5] = [
    Demo::HelloTriangle,
    Demo::Shaders,
    Demo::VertexBuffers,
    Demo::MatsAndVecs,
    Demo::VirtualCamera,
];

const TRIANGLE: [f32; 9] = [
    0.0, 0.5, 0.0,
    0.5, -0.5, 0.0,
    -0.5, -0.5, 0.0,
];

const TRIANGLE_COLOURS: [f32; 9] = [
    1.0, 0.0, 0.0,
    0.0, 1.0, 0.0,
    0.0, 0.0, 1.0,
];

/// One vertex attribute: the name it has in the vertex shader, floats per vertex, and the data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attribute {
    pub name: &'static str,
    pub components: i32,
    pub data: &'static [f32],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub positions: Attribute,
    pub colours: Option<Attribute>,
}

impl Geometry {
    pub fn vertex_count(&self) -> i32 {
        self.positions.data.len() as i32 / self.positions.components
    }

    pub fn attributes(&self) -> impl Iterator<Item = &Attribute> {
        std::iter::once(&self.positions).chain(self.colours.as_ref())
    }
}

impl Demo {
    pub fn name(self) -> &'static str {
        match self {
            Demo::HelloTriangle => "hello-triangle",
            Demo::Shaders => "shaders",
            Demo::VertexBuffers => "vertex-buffers",
            Demo::MatsAndVecs => "mats-and-vecs",
            Demo::VirtualCamera => "virtual-camera",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Demo::HelloTriangle => "00 - Hello Triangle",
            Demo::Shaders => "02 - Shaders",
            Demo::VertexBuffers => "03 - Vertex Buffer Objects",
            Demo::MatsAndVecs => "04 - Matrices and Vectors",
            Demo::VirtualCamera => "05 - Virtual Camera",
        }
    }

    /// The built-in (vertex, fragment) shader pair.
    pub fn sources(self) -> (&'static str, &'static str) {
        match self {
            Demo::HelloTriangle => (
                include_str!("../shaders/triangle.vert"),
                include_str!("../shaders/triangle.frag"),
            ),
            Demo::Shaders => (
                include_str!("../shaders/triangle.vert"),
                include_str!("../shaders/uniform_colour.frag"),
            ),
            Demo::VertexBuffers => (
                include_str!("../shaders/coloured.vert"),
                include_str!("../shaders/coloured.frag"),
            ),
            Demo::MatsAndVecs => (
                include_str!("../shaders/matrix.vert"),
                include_str!("../shaders/coloured.frag"),
            ),
            Demo::VirtualCamera => (
                include_str!("../shaders/camera.vert"),
                include_str!("../shaders/coloured.frag"),
            ),
        }
    }

    pub fn geometry(self) -> Geometry {
        match self {
            Demo::HelloTriangle | Demo::Shaders => Geometry {
                positions: Attribute { name: "vp", components: 3, data: &TRIANGLE },
                colours: None,
            },
            Demo::VertexBuffers | Demo::MatsAndVecs | Demo::VirtualCamera => Geometry {
                positions: Attribute { name: "vertex_position", components: 3, data: &TRIANGLE },
                colours: Some(Attribute { name: "vertex_colour", components: 3, data: &TRIANGLE_COLOURS }),
            },
        }
    }

    pub fn scene(self) -> Scene {
        match self {
            Demo::HelloTriangle | Demo::VertexBuffers => Scene::Static,
            Demo::Shaders => Scene::Colour(ColourScene::default()),
            Demo::MatsAndVecs => Scene::Slide(SlideScene::default()),
            Demo::VirtualCamera => Scene::Camera(CameraScene::default()),
        }
    }
}

impl fmt::Display for Demo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Demo {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_DEMOS.iter()
            .copied()
            .find(|demo| demo.name() == s)
            .ok_or_else(|| s.to_string())
    }
}

/// What a demo does with its program's uniforms.
#[derive(Debug, Clone)]
pub enum Scene {
    /// No uniforms at all.
    Static,
    Colour(ColourScene),
    Slide(SlideScene),
    Camera(CameraScene),
}

impl Scene {
    /// Looks up the uniforms and uploads their starting values. Leaves `program` in use.
    pub fn prepare<D: ShaderDriver>(&mut self, program: &Program<D>, size: FrameSize) -> Result<(), ShaderError> {
        match self {
            Scene::Static => {
                program.set_used();
                Ok(())
            }
            Scene::Colour(scene) => scene.prepare(program),
            Scene::Slide(scene) => scene.prepare(program),
            Scene::Camera(scene) => scene.prepare(program, size),
        }
    }

    pub fn frame<D: ShaderDriver>(&mut self, program: &Program<D>, input: &CameraInput, elapsed_secs: f32) {
        match self {
            Scene::Static | Scene::Colour(_) => {}
            Scene::Slide(scene) => scene.frame(program, elapsed_secs),
            Scene::Camera(scene) => scene.frame(program, input, elapsed_secs),
        }
    }

    pub fn resize<D: ShaderDriver>(&mut self, program: &Program<D>, size: FrameSize) {
        if let Scene::Camera(scene) = self {
            scene.resize(program, size);
        }
    }
}
