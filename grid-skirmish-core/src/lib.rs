#![cfg_attr(feature = "strict", deny(warnings))]

#[macro_use]
extern crate uom;

mod detail;
// Generated by uom's system! and quantity! macros
#[allow(unexpected_cfgs, dead_code)]
pub mod numeric_types;
pub mod serialization;

use std::{cmp, ops};

use async_trait::async_trait;
use num_traits::FromPrimitive;

pub use detail::constants;
pub use detail::{DotEffect, Error, Ranged, Rectangle, Roster, Unit, UnitId, UnitKind};

// Trait used for abstracting away logic that is specific to a particular platform
#[async_trait(?Send)]
pub trait Platform {
    // Type used to represent errors
    type Error: std::string::ToString;

    // Type used to represent images
    type Image;

    // Type used to represent distance on the screen
    type ScreenDistance: From<i32>
        + Copy
        + ops::Add<Output = Self::ScreenDistance>
        + ops::Sub<Output = Self::ScreenDistance>
        + ops::Mul<Output = Self::ScreenDistance>
        + ops::Div<Output = Self::ScreenDistance>
        + cmp::PartialOrd
        + num_traits::ToPrimitive
        + num_traits::NumCast
        + FromPrimitive;

    // Future type returned by get_image
    type ImageFuture: std::future::Future<Output = Option<Self::Image>>;

    // Type used to represent files
    type File: std::convert::AsRef<[u8]>;

    // Type used to represent user-specific files (might be different type from more general
    // files
    type UserFile: std::convert::AsRef<[u8]>;

    // Draw an image to the screen, scaled to the given size
    fn draw_primitive(
        &self,
        img: &Self::Image,
        left: Self::ScreenDistance,
        top: Self::ScreenDistance,
        width: Self::ScreenDistance,
        height: Self::ScreenDistance,
    );

    // Fill a rectangle on the screen with a solid color
    fn fill_rectangle(
        &self,
        color: Color,
        left: Self::ScreenDistance,
        top: Self::ScreenDistance,
        width: Self::ScreenDistance,
        height: Self::ScreenDistance,
    );

    // Retrieve an image from a specified file path
    fn get_image(path: &str) -> Self::ImageFuture;

    // Retrieve a file from a specified file path
    async fn get_file(&self, path: &str) -> Result<Self::File, Self::Error>;

    // Retrieve a user specific file
    async fn get_user_file(&self, path: &str) -> Result<Self::UserFile, Self::Error>;

    // Log a message (typically to stdout or the equivalent)
    fn log(msg: &str);

    // Draw an image to the screen
    fn draw(&self, img: &Self::Image, location: &Rectangle<Self::ScreenDistance>) {
        self.draw_primitive(
            img,
            location.left(),
            location.top(),
            location.width(),
            location.height(),
        );
    }

    // Fill a rectangle with a solid color
    fn fill(&self, color: Color, location: &Rectangle<Self::ScreenDistance>) {
        self.fill_rectangle(
            color,
            location.left(),
            location.top(),
            location.width(),
            location.height(),
        );
    }

    // Retrieves the lineup of units to deploy. A user lineup (JSON) takes precedence over the
    // lineup shipped with the game (MessagePack)
    async fn get_lineup(&self, name: &str) -> Result<serialization::Lineup, Error> {
        let user_file = self.get_user_file(constants::USER_LINEUP).await;
        let file: detail::FileWrapper<Self> = match user_file {
            Ok(f) => detail::FileWrapper::User(f),
            _ => {
                let lineup_path = format!("lineups/{}.lineup", name);
                let global = self
                    .get_file(lineup_path.as_str())
                    .await
                    .map_err(|e| Error::File(e.to_string()))?;
                detail::FileWrapper::Global(global)
            }
        };
        let lineup: serialization::Lineup = match &file {
            detail::FileWrapper::User(_) => serde_json::from_slice(file.as_ref())?,
            detail::FileWrapper::Global(_) => rmp_serde::decode::from_read_ref(&file)?,
        };
        lineup.validate()?;
        Ok(lineup)
    }
}

// Represents a vector
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Vector<T> {
    pub x: T,
    pub y: T,
}

// An opaque RGB color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }
}

// Loads the named lineup and builds a roster from it, loading every unit's image. Failures are
// reported through the platform log
pub async fn deploy<P: Platform>(platform: &P, lineup: &str) -> Option<Roster<P>> {
    match detail::deploy_internal(platform, lineup).await {
        Ok(roster) => Some(roster),
        Err(e) => {
            P::log(e.to_string().as_str());
            None
        }
    }
}
