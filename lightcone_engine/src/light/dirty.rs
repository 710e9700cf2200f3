/// Private dirty-bit set shared by the light caches.
///
/// Each bit marks one derived value as stale. Bits are set by setters and
/// cleared by the getter that recomputes the value.

use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(crate) struct LightDirty: u8 {
        const PROJECTION_MATRIX = 1 << 0;
        const VIEW_MATRIX       = 1 << 1;
        const FRUSTUM           = 1 << 2;
        const FRUSTUM_VERTICES  = 1 << 3;
        const BOUNDING_BOX      = 1 << 4;

        /// Everything that depends on the cone shape (angles, near, aspect, range)
        const SHAPE = Self::PROJECTION_MATRIX.bits()
            | Self::FRUSTUM.bits()
            | Self::FRUSTUM_VERTICES.bits();

        /// Everything that depends on position/rotation
        const POSE = Self::VIEW_MATRIX.bits()
            | Self::FRUSTUM.bits()
            | Self::FRUSTUM_VERTICES.bits();
    }
}

impl LightDirty {
    /// Clear `flag` and report whether it was set.
    pub(crate) fn take(&mut self, flag: LightDirty) -> bool {
        let was_set = self.contains(flag);
        self.remove(flag);
        was_set
    }
}
