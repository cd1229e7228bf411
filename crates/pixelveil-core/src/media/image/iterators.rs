use image::buffer::{Pixels, PixelsMut};
use image::{Pixel, Rgb, RgbImage};
use std::slice::{Iter, IterMut};

/// Read access to the color channels of an image in embedding order:
/// pixels row-major (row 0 left to right, then row 1, ...), channels R, G, B
/// within each pixel. The full plane is visited, nothing is skipped.
pub(crate) struct RgbChannels<'a> {
    pixels: Pixels<'a, Rgb<u8>>,
    channels: Iter<'a, u8>,
}

impl<'a> RgbChannels<'a> {
    pub fn new(image: &'a RgbImage) -> Self {
        Self {
            pixels: image.pixels(),
            channels: Default::default(),
        }
    }
}

impl<'a> Iterator for RgbChannels<'a> {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        self.channels.next().copied().or_else(|| {
            if let Some(pixel) = self.pixels.next() {
                self.channels = pixel.channels().iter();
            }
            self.channels.next().copied()
        })
    }
}

/// Mutable counterpart of [`RgbChannels`], same traversal order. Any
/// deviation between the two would break round trips.
pub(crate) struct RgbChannelsMut<'a> {
    pixels: PixelsMut<'a, Rgb<u8>>,
    channels: IterMut<'a, u8>,
}

impl<'a> RgbChannelsMut<'a> {
    pub fn new(image: &'a mut RgbImage) -> Self {
        Self {
            pixels: image.pixels_mut(),
            channels: Default::default(),
        }
    }
}

impl<'a> Iterator for RgbChannelsMut<'a> {
    type Item = &'a mut u8;

    fn next(&mut self) -> Option<Self::Item> {
        self.channels.next().or_else(|| {
            if let Some(pixel) = self.pixels.next() {
                self.channels = pixel.channels_mut().iter_mut();
            }
            self.channels.next()
        })
    }
}
